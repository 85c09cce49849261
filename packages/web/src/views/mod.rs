mod home;
pub use home::Home;

mod rooms;
pub use rooms::Rooms;

mod location_rooms;
pub use location_rooms::LocationRooms;

mod room_detail;
pub use room_detail::RoomDetail;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod admin;
pub use admin::{AdminBookings, AdminLocations, AdminRooms, AdminUsers};
