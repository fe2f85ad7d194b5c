use crate::math::Vec4;
use crate::paint::Color;

use super::{DrawQuad, FilterMode, ImageHandle, QuadKind};

/// Short-lived access to the quad produced by a submission.
///
/// Holds a mutable borrow of the frame, so it cannot outlive the next
/// submission. A culled submission yields a detached handle: every setter is a
/// no-op and [`index`](Self::index) is `None`. Use the index with
/// [`DrawFrame::quad_mut`](super::DrawFrame::quad_mut) to edit the quad later.
#[derive(Debug)]
pub struct QuadMut<'a> {
    slot: Option<(usize, &'a mut DrawQuad)>,
}

impl<'a> QuadMut<'a> {
    #[inline]
    pub(crate) fn stored(index: usize, quad: &'a mut DrawQuad) -> Self {
        Self { slot: Some((index, quad)) }
    }

    #[inline]
    pub(crate) fn culled() -> Self {
        Self { slot: None }
    }

    #[inline]
    pub fn is_culled(&self) -> bool {
        self.slot.is_none()
    }

    /// Index of the quad in the frame's buffer.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.slot.as_ref().map(|(i, _)| *i)
    }

    #[inline]
    pub fn get(&self) -> Option<&DrawQuad> {
        self.slot.as_ref().map(|(_, q)| &**q)
    }

    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut DrawQuad> {
        self.slot.as_mut().map(|(_, q)| &mut **q)
    }

    /// Applies `f` to the stored quad, if any.
    #[inline]
    pub fn edit(mut self, f: impl FnOnce(&mut DrawQuad)) -> Self {
        if let Some(q) = self.get_mut() {
            f(q);
        }
        self
    }

    #[inline]
    pub fn uv(self, uv: Vec4) -> Self {
        self.edit(|q| q.uv = uv)
    }

    #[inline]
    pub fn image(self, image: ImageHandle) -> Self {
        self.edit(|q| q.image = Some(image))
    }

    /// Sets both min and mag filters.
    #[inline]
    pub fn filter(self, mode: FilterMode) -> Self {
        self.edit(|q| {
            q.min_filter = mode;
            q.mag_filter = mode;
        })
    }

    #[inline]
    pub fn min_filter(self, mode: FilterMode) -> Self {
        self.edit(|q| q.min_filter = mode)
    }

    #[inline]
    pub fn mag_filter(self, mode: FilterMode) -> Self {
        self.edit(|q| q.mag_filter = mode)
    }

    #[inline]
    pub fn z(self, z: i32) -> Self {
        self.edit(|q| q.z = z)
    }

    #[inline]
    pub fn color(self, color: Color) -> Self {
        self.edit(|q| q.color = color)
    }

    #[inline]
    pub fn kind(self, kind: QuadKind) -> Self {
        self.edit(|q| q.kind = kind)
    }

    /// Writes one per-vertex user-data slot. Out-of-range slots are logged and ignored.
    pub fn userdata(self, slot: usize, value: Vec4) -> Self {
        self.edit(|q| match q.userdata.get_mut(slot) {
            Some(v) => *v = value,
            None => log::error!(
                "userdata slot {slot} out of range (max {})",
                super::VERTEX_USER_DATA_COUNT - 1
            ),
        })
    }
}
