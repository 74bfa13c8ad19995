//! Test helpers wiring the CLI to a stubbed transport.

use std::cell::RefCell;
use std::sync::Arc;

use georoute_core::HttpTransport;
use georoute_core::test_support::StubTransport;
use georoute_graphhopper::{GraphHopper, GraphHopperConfig};

use super::*;
use crate::connection::SharedAdapter;

/// Adapter factory that hands every command the same stub transport and
/// remembers the configuration it was asked to build.
pub(super) struct StubAdapterFactory {
    transport: Arc<StubTransport>,
    built: RefCell<Option<GraphHopperConfig>>,
}

impl StubAdapterFactory {
    pub(super) fn new(transport: StubTransport) -> Self {
        Self {
            transport: Arc::new(transport),
            built: RefCell::new(None),
        }
    }

    pub(super) fn transport(&self) -> &StubTransport {
        &self.transport
    }

    pub(super) fn built(&self) -> Option<GraphHopperConfig> {
        self.built.borrow().clone()
    }
}

impl AdapterFactory for StubAdapterFactory {
    fn build(&self, config: GraphHopperConfig) -> Result<SharedAdapter, CliError> {
        self.built.replace(Some(config.clone()));
        let transport: Arc<dyn HttpTransport> = self.transport.clone();
        Ok(GraphHopper::with_transport(config, transport)?)
    }
}

/// Parse `args` as a georoute invocation and run it against `factory`,
/// returning whatever the command wrote.
pub(super) fn invoke<I, S>(args: I, factory: &StubAdapterFactory) -> (Result<(), CliError>, String)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut invocation = vec!["georoute".to_owned()];
    invocation.extend(args.into_iter().map(Into::into));
    let mut output = Vec::new();
    let result = match Cli::try_parse_from(invocation) {
        Ok(cli) => tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime")
            .block_on(run_command_with(cli.command, factory, &mut output)),
        Err(err) => Err(CliError::ArgumentParsing(err)),
    };
    let written = String::from_utf8(output).expect("command output should be UTF-8");
    (result, written)
}
