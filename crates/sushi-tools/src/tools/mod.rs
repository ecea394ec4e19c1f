//! Built-in tool implementations.

mod cheapest_tuna;
mod order_status;
mod place_order;
mod restaurant_details;
mod restaurant_menu;
mod search_restaurants;

pub use cheapest_tuna::FindCheapestTunaRoll;
pub use order_status::CheckOrderStatus;
pub use place_order::PlaceOrder;
pub use restaurant_details::GetRestaurantDetails;
pub use restaurant_menu::GetRestaurantMenu;
pub use search_restaurants::SearchNearbyRestaurants;
