mod layout;
pub use layout::AppLayout;

mod home;
pub use home::Home;

mod attractions;
pub use attractions::Attractions;

mod attraction_detail;
pub use attraction_detail::AttractionDetail;

mod login;
pub use login::Login;

mod orders;
pub use orders::Orders;

mod user_center;
pub use user_center::UserCenter;

mod admin;
pub use admin::Admin;

mod about;
pub use about::About;

mod not_found;
pub use not_found::NotFound;
