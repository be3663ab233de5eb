//! Example 02 – Any order
//!
//! Required fields can be supplied in any order. Two chains that supplied the same
//! fields end up in the same state type, whatever order they took.

use anyhow::Result;

use crate::FluentBuilder;

#[derive(FluentBuilder, Debug, PartialEq)]
pub struct Connection {
    #[builder(required)]
    pub host: String,
    #[builder(required)]
    pub port: u16,
    #[builder(required)]
    pub user: String,
}

fn finish(state: connection_builder::Final) -> Connection {
    state.build()
}

/// Example 02 – all six orders of three required fields reach `Final`.
pub fn run() -> Result<()> {
    let expected = Connection {
        host: "localhost".to_string(),
        port: 5432,
        user: "admin".to_string(),
    };

    let host = || "localhost".to_string();
    let user = || "admin".to_string();

    let orders = [
        finish(Connection::builder().host(host()).port(5432).user(user())),
        finish(Connection::builder().host(host()).user(user()).port(5432)),
        finish(Connection::builder().port(5432).host(host()).user(user())),
        finish(Connection::builder().port(5432).user(user()).host(host())),
        finish(Connection::builder().user(user()).host(host()).port(5432)),
        finish(Connection::builder().user(user()).port(5432).host(host())),
    ];
    for built in orders {
        assert_eq!(built, expected);
    }

    // `host` then `user` and `user` then `host` both leave only `port` missing.
    let one: connection_builder::Missing1 = Connection::builder().host(host()).user(user());
    let other: connection_builder::Missing1 = Connection::builder().user(user()).host(host());
    assert_eq!(one.port(1).build().port, 1);
    assert_eq!(other.port(2).build().port, 2);

    Ok(())
}
