//! Parts Master Common Library
//!
//! CLIとWeb(WASM)で共有される型・API契約・検索・表示モデル

pub mod api;
pub mod config;
pub mod error;
pub mod message;
pub mod search;
pub mod state;
pub mod tabs;
pub mod types;
pub mod view;

pub use api::{MasterLoad, MasterUpload, MatchingOutcome};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use message::{MessageKind, StatusMessage};
pub use search::{search, SearchOutcome, SearchQuery};
pub use state::{MasterState, SearchDisplay};
pub use tabs::Tab;
pub use types::{MasterDataset, MasterItem, MatchResult, PartRef};
pub use view::{
    matching_display, MasterEntryView, MasterListView, MasterPanel, MatchEntryView, MatchSummary,
    MatchingView, PartRowView,
};
