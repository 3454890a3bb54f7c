use chartransfer_core::tables::TransferPlan;
use clap::Parser;

/// Copy one character from an EQEmu (PEQ) database into an EQMacEmu (TAKP)
/// database. Existing destination rows for the character are replaced.
#[derive(Parser, Debug)]
#[command(name = "chartransfer", version)]
pub struct Args {
    /// Name of the character to copy.
    #[arg(short, long)]
    pub character: String,

    /// Also copy worn equipment. Items in slots the destination lacks
    /// (power source, bags, bank) abort the inventory transfer.
    #[arg(long, default_value_t = false)]
    pub include_inventory: bool,
}

impl Args {
    pub fn plan(&self) -> TransferPlan {
        let plan = TransferPlan::default();
        if self.include_inventory {
            plan.with_inventory()
        } else {
            plan
        }
    }
}
