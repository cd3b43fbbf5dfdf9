/*!
# Launchkit Protocol

Request/response plumbing between a launcher host and a plugin built on
`launchkit-ranking`.

```text
JSON request {"method", "parameters"}
  └─> Dispatcher
        ├─> "query" + palette prefix ─> CommandPalette ─> ranked commands
        └─> handler registered for the method
              └─> Response {"result": [ResultItem, ...]} ─> JSON
```

## Example

```rust
use launchkit_protocol::{Dispatcher, Request, Response};
use launchkit_ranking::{CommandRegistry, PaletteConfig, RankOptions, ResultItem, ResultList};

let mut dispatcher = Dispatcher::new()
    .with_palette(CommandRegistry::builtin(), PaletteConfig::default())?;
dispatcher.register("query", |request: &Request| -> anyhow::Result<Option<Response>> {
    let mut list: ResultList = ["Firefox", "Files"].into_iter().map(ResultItem::new).collect();
    list.rank(request.query(), &RankOptions::default().with_min_score(10.0))?;
    Ok(Some(list.into()))
})?;

let json = dispatcher.handle_json(r#"{"method":"query","parameters":["fox"]}"#)?;
assert!(json.is_some());
# Ok::<(), launchkit_protocol::ProtocolError>(())
```
*/

mod dispatcher;
mod error;
mod request;
mod response;

pub use dispatcher::{Dispatcher, Handler};
pub use error::{ProtocolError, Result};
pub use request::{Argument, Request};
pub use response::Response;

/// Method name the host uses for free-text queries.
pub const QUERY_METHOD: &str = "query";
