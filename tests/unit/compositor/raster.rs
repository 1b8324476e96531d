use super::*;

fn solid(canvas: Canvas, rgba: [u8; 4]) -> Frame {
    Frame::solid(
        canvas,
        Rgba8Premul::from_straight_rgba(rgba[0], rgba[1], rgba[2], rgba[3]),
    )
}

fn red_blue(canvas: Canvas) -> (Frame, Frame) {
    (
        solid(canvas, [255, 0, 0, 255]),
        solid(canvas, [0, 0, 255, 255]),
    )
}

#[test]
fn composite_rejects_mismatched_frames() {
    let a = solid(Canvas::new(2, 2).unwrap(), [255, 0, 0, 255]);
    let b = solid(Canvas::new(3, 2).unwrap(), [0, 0, 255, 255]);
    let mut dest = Surface::new(Canvas::new(2, 2).unwrap());

    let err = composite(&a, &b, &[], &mut dest).unwrap_err();
    assert!(matches!(err, SegueError::Precondition(_)));
}

#[test]
fn unclipped_identity_draw_copies_frame() {
    let canvas = Canvas::new(4, 3).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    composite(&a, &b, &[Instruction::image(FrameSelector::A)], &mut dest).unwrap();
    assert_eq!(dest.data(), a.data());
}

#[test]
fn draw_order_is_list_order() {
    let canvas = Canvas::new(2, 2).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    composite(
        &a,
        &b,
        &[
            Instruction::image(FrameSelector::A),
            Instruction::image(FrameSelector::B),
        ],
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest.data(), b.data());
}

#[test]
fn clip_limits_painted_pixels_to_region() {
    let canvas = Canvas::new(4, 1).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    let clip = Rect::new(0.0, 0.0, 2.0, 1.0);
    composite(
        &a,
        &b,
        &[
            Instruction::image(FrameSelector::A),
            Instruction::image(FrameSelector::B).with_clip(&clip),
        ],
        &mut dest,
    )
    .unwrap();

    assert_eq!(dest.pixel(0, 0), [0, 0, 255, 255]);
    assert_eq!(dest.pixel(1, 0), [0, 0, 255, 255]);
    assert_eq!(dest.pixel(2, 0), [255, 0, 0, 255]);
    assert_eq!(dest.pixel(3, 0), [255, 0, 0, 255]);
}

#[test]
fn zero_area_clip_contributes_nothing() {
    let canvas = Canvas::new(4, 4).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    let degenerate = Rect::new(2.0, 0.0, 2.0, 4.0);
    composite(
        &a,
        &b,
        &[
            Instruction::image(FrameSelector::A),
            Instruction::image(FrameSelector::B).with_clip(&degenerate),
        ],
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest.data(), a.data());
}

#[test]
fn non_invertible_transform_is_a_contract_violation() {
    let canvas = Canvas::new(2, 2).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    let collapse = Affine::new([1.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    let err = composite(
        &a,
        &b,
        &[Instruction::image(FrameSelector::A).with_transform(collapse)],
        &mut dest,
    )
    .unwrap_err();
    assert!(matches!(err, SegueError::Contract(_)));
}

#[test]
fn translate_offsets_sampling() {
    let canvas = Canvas::new(4, 1).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    // A shifted right by 1px: column 0 stays uncovered.
    composite(
        &a,
        &b,
        &[Instruction::image(FrameSelector::A).with_transform(Affine::translate((1.0, 0.0)))],
        &mut dest,
    )
    .unwrap();
    assert_eq!(dest.pixel(0, 0), [0, 0, 0, 0]);
    assert_eq!(dest.pixel(1, 0), [255, 0, 0, 255]);
    assert_eq!(dest.pixel(3, 0), [255, 0, 0, 255]);
}

#[test]
fn scaling_transform_respects_destination_surface_size() {
    // 2x2 frames drawn into a 4x4 surface through a 2x upscale.
    let small = Canvas::new(2, 2).unwrap();
    let (a, b) = red_blue(small);
    let mut dest = Surface::new(Canvas::new(4, 4).unwrap());

    composite(
        &a,
        &b,
        &[Instruction::image(FrameSelector::A).with_transform(Affine::scale(2.0))],
        &mut dest,
    )
    .unwrap();
    for y in 0..4 {
        for x in 0..4 {
            assert_eq!(dest.pixel(x, y), [255, 0, 0, 255]);
        }
    }
}

#[test]
fn shape_fill_paints_with_clip_and_opacity() {
    let canvas = Canvas::new(2, 1).unwrap();
    let (a, b) = red_blue(canvas);
    let mut dest = Surface::new(canvas);

    let white = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    let clip = Rect::new(0.0, 0.0, 1.0, 1.0);
    composite(
        &a,
        &b,
        &[
            Instruction::image(FrameSelector::A),
            Instruction::fill(&canvas.rect(), white)
                .with_opacity(1.0)
                .with_clip(&clip),
        ],
        &mut dest,
    )
    .unwrap();

    assert_eq!(dest.pixel(0, 0), [255, 255, 255, 255]);
    assert_eq!(dest.pixel(1, 0), [255, 0, 0, 255]);
}

#[test]
fn only_the_destination_is_mutated() {
    let canvas = Canvas::new(2, 2).unwrap();
    let (a, b) = red_blue(canvas);
    let a_before = a.clone();
    let b_before = b.clone();
    let mut dest = Surface::new(canvas);

    composite(
        &a,
        &b,
        &[
            Instruction::image(FrameSelector::A),
            Instruction::image(FrameSelector::B).with_opacity(0.5),
        ],
        &mut dest,
    )
    .unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}
