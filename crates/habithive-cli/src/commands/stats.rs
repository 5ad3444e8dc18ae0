use clap::Subcommand;
use habithive_core::HabitStore;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Collection summary
    Summary,
    /// Total recorded completions
    Completions,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = HabitStore::open()?;
    store.load();

    match action {
        StatsAction::Summary => {
            println!("{}", serde_json::to_string_pretty(&store.summary())?);
        }
        StatsAction::Completions => {
            println!("{}", store.total_completions());
        }
    }
    Ok(())
}
