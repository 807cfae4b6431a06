//! UI Components

mod add_place;
mod board;
mod card;
mod column;
mod column_name;

pub use add_place::AddPlacePanel;
pub use board::BoardSurface;
pub use card::PlaceCard;
pub use column::ItineraryColumn;
pub use column_name::EditableColumnName;
