use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

#[derive(Clone, Debug)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    pub fn try_from_fn<E, F>(bounds: BoundsOriginRoot, mut make: F) -> Result<Self, E>
    where
        F: FnMut(Vec2) -> Result<T, E>,
    {
        let mut cells = Vec::with_capacity(bounds.area().max(0) as usize);
        for pos in bounds.positions() {
            cells.push(make(pos)?);
        }
        Ok(BoundedGrid { bounds, cells })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        self.bounds.contains(pos)
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    fn index_of(&self, pos: &Vec2) -> usize {
        (pos.i * self.bounds.cols + pos.j) as usize
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[self.index_of(index)]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        let index = self.index_of(index);
        &mut self.cells[index]
    }
}
