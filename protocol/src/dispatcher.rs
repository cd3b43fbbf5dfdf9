use crate::QUERY_METHOD;
use crate::error::{ProtocolError, Result};
use crate::request::Request;
use crate::response::Response;
use launchkit_ranking::{CommandPalette, CommandRegistry, PaletteConfig, ResultList};
use log::{debug, info, warn};
use std::collections::HashMap;

/// Something the host can call by method name.
pub trait Handler: Send + Sync {
    /// Handle a request. Actions that only cause side effects return `None`.
    fn call(&self, request: &Request) -> anyhow::Result<Option<Response>>;
}

impl<F> Handler for F
where
    F: Fn(&Request) -> anyhow::Result<Option<Response>> + Send + Sync,
{
    fn call(&self, request: &Request) -> anyhow::Result<Option<Response>> {
        self(request)
    }
}

/// Routes requests to handlers registered by method name.
///
/// `query` requests whose text starts with the palette prefix are answered
/// by the command palette before any handler is consulted.
#[derive(Default)]
pub struct Dispatcher {
    handlers: HashMap<String, Box<dyn Handler>>,
    palette: Option<(CommandRegistry, PaletteConfig)>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the command palette.
    pub fn with_palette(
        mut self,
        registry: CommandRegistry,
        config: PaletteConfig,
    ) -> Result<Self> {
        config.validate()?;
        info!(
            "Command palette enabled on prefix '{}' with {} commands",
            config.prefix,
            registry.len()
        );
        self.palette = Some((registry, config));
        Ok(self)
    }

    /// Register a handler. Each method name can be registered once.
    pub fn register(
        &mut self,
        method: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<()> {
        let method = method.into();
        if self.handlers.contains_key(&method) {
            return Err(ProtocolError::DuplicateMethod(method));
        }
        debug!("Registered handler for '{method}'");
        self.handlers.insert(method, Box::new(handler));
        Ok(())
    }

    pub fn has_method(&self, method: &str) -> bool {
        self.handlers.contains_key(method)
    }

    /// Dispatch a parsed request.
    pub fn dispatch(&self, request: &Request) -> Result<Option<Response>> {
        if request.method == QUERY_METHOD
            && let Some(list) = self.resolve_palette(request.query())?
        {
            return Ok(Some(Response::new(list)));
        }

        let Some(handler) = self.handlers.get(&request.method) else {
            warn!("No handler registered for '{}'", request.method);
            return Err(ProtocolError::UnknownMethod(request.method.clone()));
        };

        debug!(
            "Dispatching '{}' with {} arguments",
            request.method,
            request.parameters.len()
        );
        Ok(handler.call(request)?)
    }

    /// Parse a JSON request, dispatch it and serialize the response.
    pub fn handle_json(&self, json: &str) -> Result<Option<String>> {
        let request = Request::from_json(json)?;
        self.dispatch(&request)?
            .as_ref()
            .map(Response::to_json)
            .transpose()
    }

    fn resolve_palette(&self, query: &str) -> Result<Option<ResultList>> {
        let Some((registry, config)) = &self.palette else {
            return Ok(None);
        };
        let palette = CommandPalette::new(registry, config)?;
        Ok(palette.resolve(query)?)
    }
}
