//! End-to-end layout runs through the public API.

use spark_layout::{Behave, Contain, ItemId, LayoutContext, Margins, Rect, Size};

fn child(ctx: &mut LayoutContext, parent: ItemId, width: f32, height: f32) -> ItemId {
    let id = ctx.item_new();
    ctx.set_size_xy(id, width, height);
    ctx.insert(parent, id);
    id
}

fn rects(ctx: &LayoutContext) -> Vec<Rect> {
    ctx.slots().iter().map(|slot| slot.rect()).collect()
}

#[test]
fn test_empty_context_runs() {
    let mut ctx = LayoutContext::new();
    ctx.run_context();
    assert_eq!(ctx.items_count(), 0);
}

#[test]
fn test_leaf_sizing() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 50.0);

    ctx.run_context();

    assert_eq!(ctx.rect(root), Rect::new(0.0, 0.0, 100.0, 50.0));
}

#[test]
fn test_column_stacking() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 0.0);
    ctx.set_contain(root, Contain::COLUMN);

    let items: Vec<_> = (0..3)
        .map(|_| {
            let id = child(&mut ctx, root, 0.0, 10.0);
            ctx.set_behave(id, Behave::HFILL);
            id
        })
        .collect();

    ctx.run_context();

    assert_eq!(ctx.rect(items[0]), Rect::new(0.0, 0.0, 100.0, 10.0));
    assert_eq!(ctx.rect(items[1]), Rect::new(0.0, 10.0, 100.0, 10.0));
    assert_eq!(ctx.rect(items[2]), Rect::new(0.0, 20.0, 100.0, 10.0));
    assert_eq!(ctx.rect(root).height, 30.0);
}

#[test]
fn test_space_between() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 0.0);
    ctx.set_contain(root, Contain::ROW | Contain::JUSTIFY);
    let a = child(&mut ctx, root, 20.0, 10.0);
    let b = child(&mut ctx, root, 20.0, 10.0);

    ctx.run_context();

    assert_eq!(ctx.rect(a).x, 0.0);
    assert_eq!(ctx.rect(b).x, 80.0);
    assert_eq!(ctx.rect(b).width, 20.0);
}

#[test]
fn test_justify_variants() {
    let cases: [(Contain, [f32; 2]); 3] = [
        (Contain::START, [0.0, 20.0]),
        (Contain::MIDDLE, [30.0, 50.0]),
        (Contain::END, [60.0, 80.0]),
    ];
    for (justify, expected) in cases {
        let mut ctx = LayoutContext::new();
        let root = ctx.item_new();
        ctx.set_size_xy(root, 100.0, 10.0);
        ctx.set_contain(root, Contain::ROW | justify);
        let a = child(&mut ctx, root, 20.0, 10.0);
        let b = child(&mut ctx, root, 20.0, 10.0);

        ctx.run_context();

        assert_eq!([ctx.rect(a).x, ctx.rect(b).x], expected, "{justify:?}");
    }
}

#[test]
fn test_squeeze_on_overflow() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 50.0, 10.0);
    ctx.set_contain(root, Contain::ROW);

    // content-derived width of 40 each
    let mut squeezed = Vec::new();
    for _ in 0..2 {
        let id = ctx.item_new();
        ctx.insert(root, id);
        child(&mut ctx, id, 40.0, 10.0);
        squeezed.push(id);
    }

    ctx.run_context();

    assert_eq!(ctx.rect(squeezed[0]).x, 0.0);
    assert_eq!(ctx.rect(squeezed[0]).width, 25.0);
    assert_eq!(ctx.rect(squeezed[1]).x, 25.0);
    assert_eq!(ctx.rect(squeezed[1]).width, 25.0);
}

#[test]
fn test_fixed_children_are_not_squeezed() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 50.0, 10.0);
    ctx.set_contain(root, Contain::ROW | Contain::START);
    let a = child(&mut ctx, root, 40.0, 10.0);
    let b = child(&mut ctx, root, 40.0, 10.0);

    ctx.run_context();

    // overflow is left as is
    assert_eq!(ctx.rect(a), Rect::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(ctx.rect(b), Rect::new(40.0, 0.0, 40.0, 10.0));
}

#[test]
fn test_fill_children_share_leftover() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 10.0);
    ctx.set_contain(root, Contain::ROW);
    let fixed = child(&mut ctx, root, 20.0, 10.0);
    let grow_a = ctx.item_new();
    ctx.insert(root, grow_a);
    ctx.set_behave(grow_a, Behave::HFILL);
    let grow_b = ctx.item_new();
    ctx.insert(root, grow_b);
    ctx.set_behave(grow_b, Behave::HFILL);

    ctx.run_context();

    assert_eq!(ctx.rect(fixed).x, 0.0);
    assert_eq!((ctx.rect(grow_a).x, ctx.rect(grow_a).width), (20.0, 40.0));
    assert_eq!((ctx.rect(grow_b).x, ctx.rect(grow_b).width), (60.0, 40.0));
}

#[test]
fn test_free_layout_anchors() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 50.0);

    let corner = child(&mut ctx, root, 20.0, 10.0);
    ctx.set_behave(corner, Behave::RIGHT | Behave::BOTTOM);

    let centered = child(&mut ctx, root, 20.0, 10.0);

    let filled = ctx.item_new();
    ctx.insert(root, filled);
    ctx.set_behave(filled, Behave::FILL);
    ctx.set_margins(filled, Margins::uniform(5.0));

    ctx.run_context();

    assert_eq!(ctx.rect(corner), Rect::new(80.0, 40.0, 20.0, 10.0));
    assert_eq!(ctx.rect(centered), Rect::new(40.0, 20.0, 20.0, 10.0));
    assert_eq!(ctx.rect(filled), Rect::new(5.0, 5.0, 90.0, 40.0));
}

#[test]
fn test_margins_in_a_row() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_contain(root, Contain::ROW);
    let a = child(&mut ctx, root, 10.0, 10.0);
    ctx.set_margins_ltrb(a, 1.0, 2.0, 3.0, 4.0);
    ctx.set_behave(a, Behave::TOP);
    let b = child(&mut ctx, root, 10.0, 10.0);
    ctx.set_behave(b, Behave::TOP);

    ctx.run_context();

    assert_eq!(ctx.rect(root), Rect::new(0.0, 0.0, 24.0, 16.0));
    assert_eq!(ctx.rect(a), Rect::new(1.0, 2.0, 10.0, 10.0));
    assert_eq!(ctx.rect(b), Rect::new(14.0, 0.0, 10.0, 10.0));
}

#[test]
fn test_nested_rects_are_absolute() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 100.0);
    ctx.set_contain(root, Contain::COLUMN);

    let row = child(&mut ctx, root, 0.0, 20.0);
    ctx.set_contain(row, Contain::ROW);
    ctx.set_behave(row, Behave::HFILL);
    let a = child(&mut ctx, row, 10.0, 10.0);
    let b = child(&mut ctx, row, 10.0, 10.0);

    ctx.run_context();

    assert_eq!(ctx.rect(row), Rect::new(0.0, 40.0, 100.0, 20.0));
    assert_eq!(ctx.rect(a), Rect::new(40.0, 45.0, 10.0, 10.0));
    assert_eq!(ctx.rect(b), Rect::new(50.0, 45.0, 10.0, 10.0));
}

#[test]
fn test_idempotent_runs() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 120.0, 80.0);
    ctx.set_contain(root, Contain::COLUMN | Contain::JUSTIFY);
    let header = child(&mut ctx, root, 0.0, 8.0);
    ctx.set_behave(header, Behave::HFILL);
    let body = ctx.item_new();
    ctx.insert(root, body);
    ctx.set_contain(body, Contain::ROW);
    ctx.set_behave(body, Behave::FILL);
    ctx.set_margins(body, Margins::uniform(2.0));
    for width in [30.0, 50.0, 70.0] {
        child(&mut ctx, body, width, 12.0);
    }

    ctx.run_context();
    let first = rects(&ctx);
    ctx.run_context();

    assert_eq!(first, rects(&ctx));
}

#[test]
fn test_explicit_size_bypasses_children() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size(root, Size::new(30.0, 0.0));
    ctx.set_contain(root, Contain::ROW);
    child(&mut ctx, root, 50.0, 5.0);
    child(&mut ctx, root, 50.0, 7.0);

    assert_eq!(ctx.size(root), Size::new(30.0, 0.0));
    ctx.run_context();

    assert_eq!(ctx.rect(root).width, 30.0);
    assert_eq!(ctx.rect(root).height, 7.0);
}

#[test]
fn test_run_item_on_subtree() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 100.0, 10.0);
    ctx.set_contain(root, Contain::ROW | Contain::START);
    let panel = child(&mut ctx, root, 40.0, 10.0);
    ctx.set_contain(panel, Contain::ROW | Contain::END);
    let leaf = child(&mut ctx, panel, 10.0, 10.0);

    ctx.run_context();
    assert_eq!(ctx.rect(leaf).x, 30.0);

    ctx.set_contain(panel, Contain::ROW | Contain::START);
    ctx.run_item(panel);

    assert_eq!(ctx.rect(leaf).x, 0.0);
    assert_eq!(ctx.rect(panel).width, 40.0);
}

#[test]
fn test_reset_and_rebuild() {
    let mut ctx = LayoutContext::new();
    for width in [10.0, 20.0] {
        ctx.reset();
        let root = ctx.item_new();
        ctx.set_size_xy(root, width, 5.0);
        ctx.run_context();
        assert_eq!(ctx.rect(root).width, width);
        assert_eq!(ctx.items_count(), 1);
    }
    assert_eq!(ctx.items_capacity(), 32);
}

#[test]
fn test_cross_axis_clamp_and_end_anchor() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 0.0, 20.0);
    ctx.set_contain(root, Contain::ROW);
    let tall = child(&mut ctx, root, 10.0, 50.0);
    let bottom = child(&mut ctx, root, 10.0, 5.0);
    ctx.set_behave(bottom, Behave::BOTTOM);
    let lifted = child(&mut ctx, root, 10.0, 5.0);
    ctx.set_behave(lifted, Behave::BOTTOM);
    ctx.set_margins_ltrb(lifted, 0.0, 0.0, 0.0, 2.0);

    ctx.run_context();

    // never taller than the row
    assert_eq!(ctx.rect(tall), Rect::new(0.0, 0.0, 10.0, 20.0));
    assert_eq!(ctx.rect(bottom), Rect::new(10.0, 15.0, 10.0, 5.0));
    assert_eq!(ctx.rect(lifted), Rect::new(20.0, 13.0, 10.0, 5.0));
}

#[test]
fn test_cross_axis_fill_respects_margins() {
    let mut ctx = LayoutContext::new();
    let root = ctx.item_new();
    ctx.set_size_xy(root, 10.0, 20.0);
    ctx.set_contain(root, Contain::ROW);
    let filled = child(&mut ctx, root, 10.0, 0.0);
    ctx.set_behave(filled, Behave::VFILL);
    ctx.set_margins_ltrb(filled, 0.0, 3.0, 0.0, 4.0);

    ctx.run_context();

    assert_eq!(ctx.rect(filled), Rect::new(0.0, 3.0, 10.0, 13.0));
}
