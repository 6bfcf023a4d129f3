//! Serializes a materialized constraint batch to JSON.

use tether::{LayoutChain, TetherResult, ViewTree};

fn main() -> TetherResult<()> {
    let mut tree = ViewTree::new();
    let root = tree.add_root();
    let left = tree.add_child(root)?;
    let right = tree.add_child(root)?;

    let batch = LayoutChain::new(&mut tree)
        .locate(left)?
        .aligned_left(root, 16.0)?
        .and()?
        .min_width(120.0)?
        .locate(right)?
        .on_right_side(left, 8.0)?
        .and()?
        .same_width(left)?
        .apply()?;

    let specs: Vec<_> = batch.iter().filter_map(|&id| tree.spec(id)).collect();
    let json = serde_json::to_string_pretty(&specs).map_err(anyhow::Error::new)?;
    println!("{json}");
    Ok(())
}
