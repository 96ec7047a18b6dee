use cardsheet::layout::{pack_grid, place_image, slot_rect};
use cardsheet::*;
use std::sync::Arc;
use tiny_skia::Pixmap;

fn solid_pixmap(w: u32, h: u32, r: u8, g: u8, b: u8) -> Arc<Pixmap> {
    let mut pixmap = Pixmap::new(w, h).unwrap();
    pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, 255));
    Arc::new(pixmap)
}

#[test]
fn test_auto_fill_then_compose_every_card() {
    let mut project = Project::new();
    for i in 0..6u8 {
        project.add_image(
            format!("photo-{i}.jpg"),
            solid_pixmap(640, 480, i * 40, 100, 50),
        );
    }

    project.auto_fill();
    assert_eq!(project.cards.len(), 2);

    let options = LayoutOptions::default();
    for card in project.cards.cards() {
        let surface = compose_card(card, &project.library, &options).unwrap();
        assert_eq!((surface.width(), surface.height()), (1772, 1181));
    }
}

#[test]
fn test_compose_is_pixel_deterministic_across_calls() {
    let mut project = Project::new();
    let id = project.add_image("a.png", solid_pixmap(300, 200, 20, 120, 220));
    project.place_image(0, 1, id).unwrap();

    let card = project.cards.card_mut(0).unwrap();
    card.slots[1].rotation = Rotation::Clockwise90;
    card.slots[1].offset_x = 15.0;
    card.background = "#204060".parse().unwrap();

    let options = LayoutOptions {
        padding: 10.0,
        rounding: 30.0,
    };
    let card = project.cards.card(0).unwrap();
    let first = compose_card(card, &project.library, &options).unwrap();
    let second = compose_card(card, &project.library, &options).unwrap();
    assert_eq!(first.data(), second.data());
}

#[test]
fn test_removing_image_then_composing_leaves_background() {
    let mut project = Project::new();
    let id = project.add_image("a.png", solid_pixmap(400, 300, 255, 0, 0));
    project.place_image(0, 0, id).unwrap();
    project.remove_image(id);

    let options = LayoutOptions::default();
    let surface = compose_card(project.cards.card(0).unwrap(), &project.library, &options).unwrap();

    // Slot 0 inner center: nothing drawn there anymore.
    let slot = slot_rect(0, 1772.0, 1181.0, options.padding);
    let (cx, cy) = slot.center();
    let px = surface.pixel(cx as u32, cy as u32).unwrap();
    assert_eq!((px.red(), px.green(), px.blue()), (255, 255, 255));
}

#[test]
fn test_high_resolution_sources_upscale_the_export() {
    let mut project = Project::new();
    let id = project.add_image("big.png", solid_pixmap(2400, 1600, 9, 9, 9));
    project.place_image(0, 0, id).unwrap();

    let options = LayoutOptions::default();
    let card = project.cards.card(0).unwrap();
    let (w, h) = composed_size(card, &project.library, &options);
    assert!(w > 1772);
    let factor = upscale_factor(card, &project.library, options.padding);
    assert!((1.0..=MAX_UPSCALE).contains(&factor));
    assert_eq!(w, (1772.0 * factor).round() as u32);
    assert_eq!(h, (1181.0 * factor).round() as u32);
}

#[test]
fn test_grid_packer_example_from_free_form_mode() {
    let (w, h) = sheet_pixel_size(Orientation::Landscape);
    let fit = pack_grid(3, w as f32, h as f32, 18.0);
    assert_eq!((fit.cols, fit.rows), (2, 2));
    assert_eq!(fit.empty_cells(3), 1);
}

#[test]
fn test_cover_fit_holds_for_every_slot_and_rotation() {
    let (w, h) = sheet_pixel_size(Orientation::Portrait);
    for index in 0..4 {
        let slot = slot_rect(index, w as f32, h as f32, 18.0);
        for rotation in [
            Rotation::None,
            Rotation::Clockwise90,
            Rotation::Clockwise180,
            Rotation::Clockwise270,
        ] {
            let placement = place_image(&slot.inner, 640.0, 480.0, rotation, 500.0, -500.0);
            let (fw, fh) = if rotation.swaps_axes() {
                (placement.rect.height, placement.rect.width)
            } else {
                (placement.rect.width, placement.rect.height)
            };
            assert!(fw >= slot.inner.width - 1e-3);
            assert!(fh >= slot.inner.height - 1e-3);
        }
    }
}
