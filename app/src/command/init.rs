use lexrs_config::FileParameterSource;

/// Strategy for initializing the configuration.
///
/// Creates the starter configuration file at `~/lexrs/config.json`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    async fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        FileParameterSource::create_config()
    }
}
