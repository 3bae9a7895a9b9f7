//! Grid-bucket spatial index for neighbor queries.
//!
//! Uniform grid over the arena using the offset-array pattern (compressed
//! sparse rows): `cell_offsets[i]..cell_offsets[i+1]` spans the indices of
//! all entities in cell `i`. Rebuilt from entity positions at the start of
//! every tick; queries return candidate indices whose cells intersect the
//! requested radius, so callers must still distance-filter (and must treat
//! entities marked dead since the build as absent).

use vivarium_data::Vec2;

#[derive(Clone, Debug)]
pub struct SpatialGrid {
    cell_size: f32,
    min: Vec2,
    cols: usize,
    rows: usize,
    cell_offsets: Vec<usize>,
    entity_indices: Vec<usize>,
}

impl SpatialGrid {
    /// Grid covering `[min, max]` with square cells of `cell_size`.
    pub fn new(cell_size: f32, min: Vec2, max: Vec2) -> Self {
        let cols = (((max.x - min.x) / cell_size).ceil() as usize).max(1);
        let rows = (((max.y - min.y) / cell_size).ceil() as usize).max(1);
        Self {
            cell_size,
            min,
            cols,
            rows,
            cell_offsets: vec![0; cols * rows + 1],
            entity_indices: Vec::new(),
        }
    }

    #[inline]
    fn cell_index(&self, p: Vec2) -> Option<usize> {
        if !p.x.is_finite() || !p.y.is_finite() {
            return None;
        }
        let mut cx = ((p.x - self.min.x) / self.cell_size).floor() as i32;
        let mut cy = ((p.y - self.min.y) / self.cell_size).floor() as i32;
        // The max bound is a legal position (wraparound snaps onto it).
        if cx == self.cols as i32 {
            cx -= 1;
        }
        if cy == self.rows as i32 {
            cy -= 1;
        }
        if cx < 0 || cx >= self.cols as i32 || cy < 0 || cy >= self.rows as i32 {
            None
        } else {
            Some(cy as usize * self.cols + cx as usize)
        }
    }

    /// Rebuilds the index from a snapshot of positions. Entity `i` of the
    /// slice becomes candidate index `i` in query results.
    pub fn build(&mut self, positions: &[Vec2]) {
        let cell_count = self.cols * self.rows;

        let mut counts = vec![0usize; cell_count];
        for &p in positions {
            if let Some(idx) = self.cell_index(p) {
                counts[idx] += 1;
            }
        }

        self.cell_offsets.resize(cell_count + 1, 0);
        let mut total = 0;
        for (i, &count) in counts.iter().enumerate() {
            self.cell_offsets[i] = total;
            total += count;
        }
        self.cell_offsets[cell_count] = total;

        self.entity_indices.resize(total, 0);
        let mut cursor = self.cell_offsets[..cell_count].to_vec();
        for (entity_idx, &p) in positions.iter().enumerate() {
            if let Some(cell_idx) = self.cell_index(p) {
                self.entity_indices[cursor[cell_idx]] = entity_idx;
                cursor[cell_idx] += 1;
            }
        }
    }

    /// Collects into `result` the indices of all entities in cells touching
    /// the circle at `center` with `radius`.
    pub fn query_into(&self, center: Vec2, radius: f32, result: &mut Vec<usize>) {
        result.clear();
        let min_cx = ((center.x - radius - self.min.x) / self.cell_size).floor() as i32;
        let max_cx = ((center.x + radius - self.min.x) / self.cell_size).floor() as i32;
        let min_cy = ((center.y - radius - self.min.y) / self.cell_size).floor() as i32;
        let max_cy = ((center.y + radius - self.min.y) / self.cell_size).floor() as i32;

        for cy in min_cy..=max_cy {
            if cy < 0 || cy >= self.rows as i32 {
                continue;
            }
            for cx in min_cx..=max_cx {
                if cx < 0 || cx >= self.cols as i32 {
                    continue;
                }
                let cell_idx = cy as usize * self.cols + cx as usize;
                let start = self.cell_offsets[cell_idx];
                let end = self.cell_offsets[cell_idx + 1];
                result.extend_from_slice(&self.entity_indices[start..end]);
            }
        }
    }
}
