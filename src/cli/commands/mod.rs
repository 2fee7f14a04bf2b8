pub mod account;
pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let entries = system::definitions()
        .into_iter()
        .chain(account::definitions())
        .chain(transaction::definitions())
        .chain(report::definitions());
    for entry in entries {
        registry.register(entry);
    }
}
