pub mod articles;
pub mod comments;
pub mod likes;
pub mod pagination;
pub mod users;

pub use articles::{ArticleDetailsDto, ArticleDto};
pub use comments::{CommentDto, ModerationStatusDto};
pub use likes::LikeDto;
pub use pagination::Page;
pub use users::UserDto;
