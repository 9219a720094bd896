// Stores, derived indexes and rankings
pub mod id_generator;          // Store-owned post id sequence
pub mod post_store;            // Posts, likes and comments
pub mod user_store;            // Users and engagement scores
pub mod keyword_index;         // Token -> posts
pub mod trending_index;        // Posts above the like threshold
pub mod active_user_ranking;   // Users ordered by engagement
pub mod engagement;            // Fixed scoring rules
pub mod like_search;           // Exact like-count lookup
pub mod mailbox;               // Direct message queues
pub mod view_history;          // Post view stacks
pub mod traits;                // Public operations trait

pub use active_user_ranking::{ActiveUserRanking, RankedUser};
pub use engagement::{EngagementAction, EngagementPolicy};
pub use id_generator::PostIdGenerator;
pub use keyword_index::KeywordIndex;
pub use mailbox::MailboxStore;
pub use post_store::PostStore;
pub use traits::SocialOperations;
pub use trending_index::{TrendingIndex, MIN_LIKES_TRENDING};
pub use user_store::UserStore;
pub use view_history::ViewHistory;
