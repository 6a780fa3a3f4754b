use crate::error::{ExportError, Result};
use crate::ir_level::{IrLayer, IrLevel};
use crate::tile_type::{TileLabels, TileType};
use tracing::{debug, warn};

/// Pixel size of one grid cell.
pub const CELL_SIZE: u32 = 32;
/// Layer holding the gameplay tiles.
pub const GAMEPLAY_LAYER: &str = "ActualLevel";
/// Position of that layer in `layerInstances`.
pub const GAMEPLAY_LAYER_INDEX: usize = 1;

/// Fetch the gameplay layer by position and check its identity.
pub fn gameplay_layer(level: &IrLevel) -> Result<&IrLayer> {
    let layer = level
        .layers
        .get(GAMEPLAY_LAYER_INDEX)
        .ok_or_else(|| ExportError::MissingLayer {
            level: level.identifier.clone(),
            index: GAMEPLAY_LAYER_INDEX,
        })?;

    if layer.identifier != GAMEPLAY_LAYER {
        return Err(ExportError::LayerMismatch {
            level: level.identifier.clone(),
            expected: GAMEPLAY_LAYER,
            found: layer.identifier.clone(),
        });
    }
    if layer.grid_size != CELL_SIZE {
        return Err(ExportError::GridSizeMismatch {
            level: level.identifier.clone(),
            expected: CELL_SIZE,
            found: layer.grid_size,
        });
    }
    Ok(layer)
}

/// Render a level's gameplay layer as `.lvl` rows, one glyph per cell.
///
/// Cells are consumed in file order. A new row starts whenever a cell's
/// grid row differs from the previous one, so the output is only a faithful
/// picture when the editor listed cells row-major. Nothing is reordered.
/// The block always ends with a newline.
pub fn rasterize(level: &IrLevel, labels: &TileLabels<'_>) -> Result<String> {
    let layer = gameplay_layer(level)?;

    debug!(
        level = %level.identifier,
        width = level.px_wid / CELL_SIZE,
        height = level.px_hei / CELL_SIZE,
        cells = layer.tiles.len(),
        "rasterizing"
    );

    let (mut out, _) = layer.tiles.iter().try_fold(
        (String::with_capacity(layer.tiles.len() + 16), 0u32),
        |(mut out, last_y), cell| -> Result<(String, u32)> {
            let y = cell.px[1] / CELL_SIZE;

            if y != last_y {
                if y < last_y {
                    warn!(
                        level = %level.identifier,
                        from = last_y,
                        to = y,
                        "grid tiles are not row-major; output rows will be out of place"
                    );
                }
                out.push('\n');
            }

            let tag = labels
                .resolve(cell.tile_id)
                .ok_or_else(|| ExportError::UnknownTileId {
                    level: level.identifier.clone(),
                    tile_id: cell.tile_id,
                })?;
            out.push(tag.parse::<TileType>()?.glyph());

            Ok((out, y))
        },
    )?;

    out.push('\n');
    Ok(out)
}
