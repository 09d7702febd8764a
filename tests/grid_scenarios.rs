use glam::UVec2;

use tilegrid::export::tileset_descriptor;
use tilegrid::share::{apply_query_string, to_query_string};
use tilegrid::types::GridType;
use tilegrid::{GridParameters, Palette, PixelRect, TileGridError, compute_layout, draw_grid};

#[test]
fn two_adjacent_orthogonal_tiles() {
    let params = GridParameters {
        grid_type: GridType::Orthogonal,
        tile_width: 32,
        tile_height: 32,
        margin: 0,
        spacing: 0,
        tiles_per_row: 2,
        tiles_per_col: 1,
        draw_padding: 0,
        extra_height: 0,
    };
    let palette = Palette::default();
    let (surface, layout) = draw_grid(&params, &palette).unwrap();

    assert_eq!((layout.canvas_width(), layout.canvas_height()), (64, 32));
    assert_eq!(layout.cells()[0].outer_rect, PixelRect::new(0, 0, 32, 32));
    assert_eq!(layout.cells()[1].outer_rect, PixelRect::new(32, 0, 32, 32));

    let left = surface.pixel(16, 16).unwrap();
    let right = surface.pixel(48, 16).unwrap();
    assert_ne!(left, right);
    assert_eq!(left, palette.even);
    assert_eq!(right, palette.odd);
}

#[test]
fn single_isometric_tile_with_margin() {
    let params = GridParameters {
        grid_type: GridType::Isometric,
        tile_width: 32,
        tile_height: 0,
        margin: 2,
        spacing: 1,
        tiles_per_row: 1,
        tiles_per_col: 1,
        draw_padding: 0,
        extra_height: 0,
    };
    let palette = Palette::default();
    let (surface, layout) = draw_grid(&params, &palette).unwrap();

    assert_eq!(layout.params().tile_height, 16);
    assert_eq!(layout.canvas_width(), 36);
    assert_eq!(layout.canvas_height(), 20);
    assert_eq!(layout.cells()[0].inner_origin, UVec2::new(2, 2));

    // The margin keeps the background colour all the way round.
    for x in 0..36 {
        assert_eq!(surface.pixel(x, 0), Some(palette.background));
        assert_eq!(surface.pixel(x, 19), Some(palette.background));
    }

    // The diamond spans 32x16 starting at the margin.
    let painted: Vec<(u32, u32)> = (0..20)
        .flat_map(|y| (0..36).map(move |x| (x, y)))
        .filter(|&(x, y)| surface.pixel(x, y) == Some(palette.even))
        .collect();
    let min_x = painted.iter().map(|p| p.0).min().unwrap();
    let max_x = painted.iter().map(|p| p.0).max().unwrap();
    let min_y = painted.iter().map(|p| p.1).min().unwrap();
    let max_y = painted.iter().map(|p| p.1).max().unwrap();
    assert_eq!((min_x, max_x), (2, 33));
    assert_eq!((min_y, max_y), (2, 17));

    // Inside the drawing rectangle but outside the diamond is cleared.
    assert_eq!(surface.pixel(2, 2), Some(palette.clear));
}

#[test]
fn checkerboard_over_a_larger_grid() {
    let params = GridParameters {
        spacing: 2,
        ..GridParameters::orthogonal(6, 6, 5, 4)
    };
    let palette = Palette::default();
    let (surface, layout) = draw_grid(&params, &palette).unwrap();

    let color_at = |row: u32, col: u32| {
        let origin = layout.cell(row, col).unwrap().inner_origin;
        surface.pixel(origin.x, origin.y).unwrap()
    };
    for row in 0..3 {
        for col in 0..4 {
            assert_ne!(color_at(row, col), color_at(row, col + 1));
            assert_eq!(color_at(row, col), color_at(row + 1, col + 1));
        }
    }
}

#[test]
fn invalid_dimensions_never_produce_a_canvas() {
    for params in [
        GridParameters::orthogonal(0, 32, 1, 1),
        GridParameters::orthogonal(32, 32, -1, 1),
        GridParameters::isometric(0, 1, 1),
    ] {
        assert!(matches!(
            compute_layout(&params),
            Err(TileGridError::InvalidParameter(_))
        ));
        assert!(draw_grid(&params, &Palette::default()).is_err());
        assert!(tileset_descriptor(&params).is_err());
    }
}

#[test]
fn descriptor_matches_rendered_canvas() {
    let params = GridParameters {
        margin: 3,
        spacing: 2,
        draw_padding: 4,
        extra_height: 8,
        ..GridParameters::isometric(48, 6, 2)
    };
    let (surface, layout) = draw_grid(&params, &Palette::default()).unwrap();
    let tsx = tileset_descriptor(&params).unwrap();

    assert!(tsx.contains(&format!(
        "tilewidth=\"{}\" tileheight=\"{}\" tilecount=\"12\" columns=\"6\"",
        layout.draw_rect_width(),
        layout.draw_rect_height()
    )));
    assert!(tsx.contains("<tileoffset x=\"-4\" y=\"4\"/>"));
    assert!(tsx.contains(&format!(
        "width=\"{}\" height=\"{}\"",
        surface.width(),
        surface.height()
    )));
}

#[test]
fn share_string_round_trip_preserves_rendering() {
    let params = GridParameters {
        margin: 1,
        extra_height: 5,
        ..GridParameters::isometric(20, 3, 3)
    };
    let restored = apply_query_string(&GridParameters::default(), &to_query_string(&params)).unwrap();
    assert_eq!(restored, params);

    let palette = Palette::default();
    let (a, _) = draw_grid(&params, &palette).unwrap();
    let (b, _) = draw_grid(&restored, &palette).unwrap();
    assert_eq!(a, b);
}
