// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod chart;
pub mod data_table;
pub mod dialog;
pub mod dropdown_menu;
pub mod form_select;
pub mod input;
pub mod search_bar;
pub mod segmented;
pub mod sidebar;
pub mod stat_card;

// Primitive wrappers
pub mod avatar;
pub mod label;
pub mod progress;
pub mod switch;
pub mod toast;

pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use chart::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use progress::*;
pub use search_bar::*;
pub use segmented::*;
pub use sidebar::*;
pub use stat_card::*;
pub use switch::*;
pub use toast::*;
