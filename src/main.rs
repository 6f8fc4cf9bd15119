//! Trunk entry point.

fn main() {
    #[cfg(feature = "csr")]
    drdent::mount();
}
