//! Sample records loaded at startup.

use chrono::Utc;

use crate::domain::{Item, ItemInput, Resource, User, UserInput};

/// The two demo items every fresh process starts with.
pub fn sample_items() -> Vec<Item> {
    let now = Utc::now();
    vec![
        Item::build(
            1,
            now,
            ItemInput::new("サンプル商品1", Some("これは商品1です"), 1000.0),
        ),
        Item::build(
            2,
            now,
            ItemInput::new("サンプル商品2", Some("これは商品2です"), 2000.0),
        ),
    ]
}

/// The two demo users every fresh process starts with.
pub fn sample_users() -> Vec<User> {
    let now = Utc::now();
    vec![
        User::build(1, now, UserInput::new("user1", "user1@example.com")),
        User::build(2, now, UserInput::new("user2", "user2@example.com")),
    ]
}
