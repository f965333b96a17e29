pub mod activity_board;
pub mod activity_card;
pub mod activity_list;
pub mod signup_form;
pub mod status_banner;

pub use activity_board::ActivityBoard;
pub use activity_card::ActivityCard;
pub use activity_list::ActivityList;
pub use signup_form::SignupForm;
pub use status_banner::StatusBanner;
