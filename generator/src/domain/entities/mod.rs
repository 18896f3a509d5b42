//! Domain entities
//!
//! Plain data for posts, media and feed items. No I/O happens here.

pub mod account;
pub mod feed_item;
pub mod media;
pub mod post;
pub mod timeline;

pub use account::{hashtag_url, profile_url, Account};
pub use feed_item::{format_rss_date, parse_created_at, FeedItem, TitleMode};
pub use media::{Media, MediaMap};
pub use post::Post;
pub use timeline::TimelinePage;
// Payload types, re-exported for fixtures and consumers
#[allow(unused_imports)]
pub use media::MediaKind;
#[allow(unused_imports)]
pub use post::{Attachments, Entities, HashtagEntity, MentionEntity, UrlEntity};
#[allow(unused_imports)]
pub use timeline::{Includes, TimelineMeta};
