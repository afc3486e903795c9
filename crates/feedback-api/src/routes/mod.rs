pub mod feedbacks;
pub mod health;
