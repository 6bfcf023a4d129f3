//! Builds a small view hierarchy and pins a card with a centered badge.

use tether::{LayoutChain, Size, TetherResult, ViewTree};

fn main() -> TetherResult<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut tree = ViewTree::new();
    let screen = tree.add_root();
    let card = tree.add_child(screen)?;
    let badge = tree.add_child(card)?;

    let card_batch = LayoutChain::new(&mut tree)
        .locate(card)?
        .fit_parent()?
        .apply()?;

    let badge_batch = LayoutChain::new(&mut tree)
        .locate(badge)?
        .size(Size::new(24.0, 24.0))?
        .and()?
        .on_center(card, 0.0)?
        .apply()?;

    println!(
        "activated {} constraints ({} for the card, {} for the badge)",
        tree.active().len(),
        card_batch.len(),
        badge_batch.len()
    );
    for &id in tree.active() {
        if let Some(spec) = tree.spec(id) {
            println!("{id:?}: {spec:?}");
        }
    }
    Ok(())
}
