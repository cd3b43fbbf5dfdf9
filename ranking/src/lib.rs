/*!
# Launchkit Ranking

Fuzzy ranking for launcher plugins: score free-text queries against result
titles and subtitles, then order, filter and cut the result list.

## Features

- **Layered matching**: prefix, capital initials ("GH" for "GitHub"), word
  atoms, atom initials and substring, with explicit precedence
- **Stable ordering**: equal scores keep insertion order
- **Threshold and limit**: strict minimum score and maximum result count
- **Command palette**: a reserved query prefix lists built-in maintenance
  commands, ranked with the same engine

## Architecture

```text
ResultList (append / insert)
  └─> rank(query, RankOptions)
        ├─> selected_text (title | subtitle | title + subtitle)
        ├─> score (per item, once)
        ├─> stable sort, descending
        ├─> min_score filter (strict)
        └─> max_results truncation
```

## Example

```rust
use launchkit_ranking::{RankOptions, ResultItem, ResultList};

let mut results = ResultList::new();
results.append(ResultItem::new("Open GitLab").with_action("open_url", "https://gitlab.com"));
results.append(ResultItem::new("Open GitHub").with_action("open_url", "https://github.com"));

let stats = results.rank("hub", &RankOptions::default().with_max_results(5))?;
assert_eq!(results.items()[0].title, "Open GitHub");
assert_eq!(stats.candidates, 2);
# Ok::<(), launchkit_ranking::RankError>(())
```
*/

mod config;
mod error;
mod item;
mod list;
mod palette;
mod pipeline;
mod scorer;

pub use config::{PaletteConfig, RankOptions, SortField};
pub use error::{RankError, Result};
pub use item::{Action, ResultItem};
pub use list::ResultList;
pub use palette::{CommandPalette, CommandRegistry, PaletteCommand, Polarity};
pub use pipeline::{RankStats, rank, selected_text};
pub use scorer::{MatchRule, Scored, score, score_with_rule};
