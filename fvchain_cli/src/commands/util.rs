use anyhow::Result;
use clap::{Args, Subcommand};
use fvchain_api::{
    from_smallest_unit, generate_device_id, generate_session_token, to_smallest_unit,
    validate_address,
};

#[derive(Args)]
pub struct UtilArgs {
    #[command(subcommand)]
    pub command: UtilCommand,
}

#[derive(Subcommand)]
pub enum UtilCommand {
    /// Generate a device ID for mining
    DeviceId,
    /// Generate a session token for mining
    SessionToken,
    /// Check an address format (exit status 1 if invalid)
    ValidateAddress { address: String },
    /// Convert an FVC amount to smallest units
    ToSmallest {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
    },
    /// Convert smallest units to FVC
    FromSmallest { value: String },
}

/// Offline helpers; none of these contact the node.
pub fn run(args: &UtilArgs) -> Result<()> {
    match &args.command {
        UtilCommand::DeviceId => println!("{}", generate_device_id()),
        UtilCommand::SessionToken => println!("{}", generate_session_token()),
        UtilCommand::ValidateAddress { address } => {
            let valid = validate_address(address);
            println!("{}", if valid { "valid" } else { "invalid" });
            if !valid {
                anyhow::bail!("{} is not a valid FVChain address", address);
            }
        }
        UtilCommand::ToSmallest { amount } => println!("{}", to_smallest_unit(*amount)?),
        UtilCommand::FromSmallest { value } => println!("{}", from_smallest_unit(value)?),
    }
    Ok(())
}
