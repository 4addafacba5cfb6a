pub mod requests;

pub use requests::{
    RestaurantCreateUpdateRequest, ReviewCreateUpdateRequest, ReviewPage, ReviewPageRequest,
};
