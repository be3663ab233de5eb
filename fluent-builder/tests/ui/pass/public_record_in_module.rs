mod shop {
    use fluent_builder::FluentBuilder;

    #[derive(FluentBuilder)]
    pub struct Order {
        #[builder(required)]
        pub id: u64,
        #[builder(required)]
        pub customer: String,
        pub note: Option<String>,
    }
}

use shop::order_builder::{self, WithOptionals};

fn take_final(state: order_builder::Final) -> shop::Order {
    state.build()
}

fn main() {
    let order = take_final(shop::Order::builder().customer("acme".to_string()).note(Some("rush".into())).id(7));
    assert_eq!(order.id, 7);
    assert_eq!(order.note.as_deref(), Some("rush"));
}
