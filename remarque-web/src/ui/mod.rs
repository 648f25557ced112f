mod app;
pub use app::{App, AppMsg};

mod comment_form;
pub use comment_form::CommentForm;

mod comment_list_item;
pub use comment_list_item::CommentListItem;

mod reply_list_item;
pub use reply_list_item::ReplyListItem;

mod storage_banner;
pub use storage_banner::StorageBanner;
