//! Reference detector architecture (Darknet-53 backbone with three
//! detection scales).

use log::info;

use crate::activation::Activation;
use crate::connections::{LayerRef, Route, Shortcut};
use crate::layers::{Convolution, Upsample, Yolo};
use crate::network::Node;

/// Box geometry (x, y, w, h) plus one objectness score per anchor.
pub const BOX_PARAMS: u32 = 5;

/// Residual repeats of the five backbone stages.
pub const STAGE_REPEATS: [usize; 5] = [1, 2, 8, 8, 4];

/// Anchor pairs handled by each detection head, coarsest scale first.
pub const HEAD_MASKS: [[u32; 3]; 3] = [[6, 7, 8], [3, 4, 5], [0, 1, 2]];

/// Absolute index of the last layer of the fourth backbone stage.
///
/// Only valid for `STAGE_REPEATS`; changing the repeat counts moves it.
pub const ROUTE_STAGE4: usize = 61;

/// Absolute index of the last layer of the third backbone stage.
///
/// Only valid for `STAGE_REPEATS`; changing the repeat counts moves it.
pub const ROUTE_STAGE3: usize = 36;

/// Filter count of the 1x1 convolution feeding a detection head:
/// `floor(num_anchors / num_heads * (5 + num_classes))`.
///
/// Computed in `u64`, which holds the result for any `u32` inputs. Zero
/// heads yields zero filters.
pub fn detection_filters(num_classes: u32, num_anchors: u32, num_heads: u32) -> u64 {
    if num_heads == 0 {
        return 0;
    }
    let total = u64::from(num_anchors) * (u64::from(BOX_PARAMS) + u64::from(num_classes));
    total / u64::from(num_heads)
}

/// Input convolution followed by the first stride-2 downsample.
pub fn stem_block(filters: u64) -> Vec<Node> {
    vec![
        Convolution::leaky(filters, 3, 1).into(),
        Convolution::leaky(filters * 2, 3, 2).into(),
    ]
}

/// `repeats` residual units of 1x1 (`filters`), 3x3 (`2 * filters`) and a
/// linear shortcut to the unit's input.
pub fn residual_block(filters: u64, repeats: usize) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(repeats * 3);
    for _ in 0..repeats {
        nodes.push(Convolution::leaky(filters, 1, 1).into());
        nodes.push(Convolution::leaky(filters * 2, 3, 1).into());
        nodes.push(Shortcut::new(LayerRef::Back(3), Activation::Linear).into());
    }
    nodes
}

/// `repeats` pairs of 1x1 (`filters`) and 3x3 (`2 * filters`) convolutions
/// without shortcuts.
pub fn plain_block(filters: u64, repeats: usize) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(repeats * 2);
    for _ in 0..repeats {
        nodes.push(Convolution::leaky(filters, 1, 1).into());
        nodes.push(Convolution::leaky(filters * 2, 3, 1).into());
    }
    nodes
}

/// 3x3 stride-2 convolution halving the spatial resolution.
pub fn downsample(filters: u64) -> Node {
    Convolution::leaky(filters, 3, 2).into()
}

/// Builds the three-scale reference detector.
///
/// `anchors` is the flattened anchor set shared by every head and
/// `num_anchors` the number of pairs it holds. Nothing is validated: zero
/// classes or a short anchor list produce a well-formed but meaningless
/// network.
pub fn build_reference_detector(num_classes: u32, anchors: &[u32], num_anchors: u32) -> Vec<Node> {
    let num_heads = HEAD_MASKS.len() as u32;
    let head_filters = detection_filters(num_classes, num_anchors, num_heads);

    let mut layers = stem_block(32);

    // Backbone: stage i works at 32 * 2^i filters and, except for the
    // last, ends with a downsample to the next width.
    let mut width = 32;
    for (stage, &repeats) in STAGE_REPEATS.iter().enumerate() {
        layers.extend(residual_block(width, repeats));
        if stage + 1 < STAGE_REPEATS.len() {
            layers.push(downsample(width * 4));
        }
        width *= 2;
    }

    let detection = |mask: [u32; 3]| -> Node {
        Yolo::new(anchors.to_vec(), num_classes, mask.to_vec()).into()
    };

    // Coarse scale.
    layers.extend(plain_block(512, 3));
    layers.push(Convolution::linear(head_filters).into());
    layers.push(detection(HEAD_MASKS[0]));

    layers.push(Route::new(vec![LayerRef::Back(4)]).into());
    layers.push(Convolution::leaky(256, 1, 1).into());
    layers.push(Upsample::new(2).into());
    layers.push(Route::new(vec![LayerRef::Back(1), LayerRef::Absolute(ROUTE_STAGE4)]).into());

    // Medium scale.
    layers.extend(plain_block(256, 3));
    layers.push(Convolution::linear(head_filters).into());
    layers.push(detection(HEAD_MASKS[1]));

    layers.push(Route::new(vec![LayerRef::Back(4)]).into());
    layers.push(Convolution::leaky(128, 1, 1).into());
    layers.push(Upsample::new(2).into());
    layers.push(Route::new(vec![LayerRef::Back(1), LayerRef::Absolute(ROUTE_STAGE3)]).into());

    // Fine scale.
    layers.extend(plain_block(128, 3));
    layers.push(Convolution::linear(head_filters).into());
    layers.push(detection(HEAD_MASKS[2]));

    info!(
        "built reference detector: {} layers, {} classes, {} filters per head",
        layers.len(),
        num_classes,
        head_filters
    );
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::DEFAULT_ANCHORS;

    #[test]
    fn coco_heads_use_255_filters() {
        assert_eq!(detection_filters(80, 9, 3), 255);
    }

    #[test]
    fn filters_floor_fractional_products() {
        // 9 / 2 * 85 = 382.5
        assert_eq!(detection_filters(80, 9, 2), 382);
        assert_eq!(detection_filters(1, 9, 3), 18);
        assert_eq!(detection_filters(80, 9, 0), 0);
    }

    #[test]
    fn filters_do_not_overflow_for_huge_class_counts() {
        assert_eq!(detection_filters(2_000_000_000, 9, 3), 6_000_000_015);
        assert_eq!(
            detection_filters(u32::MAX, 9, 3),
            3 * (u64::from(u32::MAX) + 5)
        );
    }

    #[test]
    fn reference_builds_with_max_class_count() {
        let layers = build_reference_detector(u32::MAX, &DEFAULT_ANCHORS, 9);
        assert_eq!(layers.len(), 107);
        match &layers[81] {
            Node::Convolution(conv) => assert_eq!(conv.filters, detection_filters(u32::MAX, 9, 3)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn residual_units_shortcut_three_back() {
        let block = residual_block(64, 2);
        assert_eq!(block.len(), 6);
        assert_eq!(block[2], Node::Shortcut(Shortcut::default()));
        assert_eq!(block[5], Node::Shortcut(Shortcut::default()));
    }

    #[test]
    fn plain_block_has_no_shortcuts() {
        let block = plain_block(128, 3);
        assert_eq!(block.len(), 6);
        assert!(block.iter().all(|n| matches!(n, Node::Convolution(_))));
    }

    #[test]
    fn reference_has_107_layers() {
        let layers = build_reference_detector(80, &DEFAULT_ANCHORS, 9);
        assert_eq!(layers.len(), 107);
    }

    #[test]
    fn stage_route_targets_are_stage_ends() {
        let layers = build_reference_detector(80, &DEFAULT_ANCHORS, 9);
        // Each fixed target is the last shortcut of its stage, immediately
        // followed by that stage's downsample.
        for target in [ROUTE_STAGE3, ROUTE_STAGE4] {
            assert!(matches!(layers[target], Node::Shortcut(_)));
            match &layers[target + 1] {
                Node::Convolution(conv) => assert_eq!(conv.stride, 2),
                other => panic!("expected downsample after {target}, got {other:?}"),
            }
        }
    }
}
