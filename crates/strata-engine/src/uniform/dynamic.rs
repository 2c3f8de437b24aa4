use std::ops::Range;

use bytemuck::Pod;

use crate::device::{BufferFrequencyHint, BufferId, BufferUsage, GfxDevice};

/// Linear, page-aligned sub-allocator over one growable uniform buffer.
///
/// Writes go to a CPU shadow copy; [`flush`](Self::flush) uploads the range
/// written this frame in one transfer and rewinds the cursor. Offsets handed
/// out before a flush are dead afterwards.
///
/// All sizes and offsets are in 32-bit words.
#[derive(Debug)]
pub struct DynamicUniformBuffer {
    word_alignment: u32,

    shadow: Vec<f32>,
    cursor: u32,
    /// Words uploaded by the most recent flush.
    last_flush_words: u32,

    buffer: Option<BufferId>,
    buffer_words: u32,
}

impl DynamicUniformBuffer {
    pub fn new(device: &dyn GfxDevice) -> Self {
        Self::with_capacity(device, 0)
    }

    /// Creates an allocator whose CPU shadow starts with `initial_words` of capacity.
    pub fn with_capacity(device: &dyn GfxDevice, initial_words: u32) -> Self {
        let word_alignment = device.limits().uniform_buffer_word_alignment.max(1);
        let capacity = align(initial_words, word_alignment);
        Self {
            word_alignment,
            shadow: vec![0.0; capacity as usize],
            cursor: 0,
            last_flush_words: 0,
            buffer: None,
            buffer_words: 0,
        }
    }

    /// Minimum uniform page size in words; every allocation is a multiple of it.
    #[inline]
    pub fn word_alignment(&self) -> u32 {
        self.word_alignment
    }

    /// Words allocated since the last flush.
    #[inline]
    pub fn words_allocated(&self) -> u32 {
        self.cursor
    }

    #[inline]
    pub fn capacity_words(&self) -> u32 {
        self.shadow.len() as u32
    }

    /// Device buffer backing the allocator. `None` until the first non-empty flush.
    #[inline]
    pub fn buffer(&self) -> Option<BufferId> {
        self.buffer
    }

    /// Reserves `word_count` words (rounded up to the page size) and returns
    /// the offset of the reservation.
    pub fn allocate(&mut self, word_count: u32) -> u32 {
        let size = align(word_count, self.word_alignment);
        let offset = self.cursor;
        let end = offset
            .checked_add(size)
            .expect("dynamic uniform buffer exceeded u32::MAX words");

        self.ensure_shadow_capacity(end);
        self.cursor = end;
        offset
    }

    /// Writable view of `word_count` words at `word_offset`.
    ///
    /// # Panics
    /// Panics if the range was not allocated since the last flush.
    pub fn map_f32(&mut self, word_offset: u32, word_count: u32) -> &mut [f32] {
        let range = self.live_range(word_offset, word_count);
        &mut self.shadow[range]
    }

    /// Copies a plain-data block to `word_offset`. Its size must be a whole number of words.
    pub fn write<T: Pod>(&mut self, word_offset: u32, value: &T) {
        let bytes = bytemuck::bytes_of(value);
        assert!(
            bytes.len() % 4 == 0,
            "uniform block of {} bytes is not a whole number of words",
            bytes.len()
        );
        let dst = self.map_f32(word_offset, (bytes.len() / 4) as u32);
        bytemuck::cast_slice_mut::<f32, u8>(dst).copy_from_slice(bytes);
    }

    /// Uploads everything allocated since the last flush and rewinds the cursor.
    ///
    /// The device buffer is recreated when the shadow has outgrown it.
    pub fn flush(&mut self, device: &mut dyn GfxDevice) {
        if self.cursor == 0 {
            if self.last_flush_words > 0 {
                log::warn!(
                    "dynamic uniform buffer: flush with no allocations after a frame that uploaded {} words",
                    self.last_flush_words
                );
            }
            self.last_flush_words = 0;
            return;
        }

        let capacity = self.capacity_words();
        if self.buffer.is_none() || self.buffer_words < capacity {
            if let Some(old) = self.buffer.take() {
                device.destroy_buffer(old);
            }
            log::debug!(
                "dynamic uniform buffer: device buffer {} -> {} words",
                self.buffer_words,
                capacity
            );
            self.buffer = Some(device.create_buffer(
                capacity,
                BufferUsage::Uniform,
                BufferFrequencyHint::Dynamic,
            ));
            self.buffer_words = capacity;
        }

        if let Some(buffer) = self.buffer {
            let words = &self.shadow[..self.cursor as usize];
            device.upload_buffer_data(buffer, 0, bytemuck::cast_slice(words));
        }

        log::trace!("dynamic uniform buffer: flushed {} words", self.cursor);
        self.last_flush_words = self.cursor;
        self.cursor = 0;
    }

    /// Drops everything allocated since the last flush without uploading it.
    ///
    /// Used when a frame is abandoned before it reaches the GPU.
    pub fn rewind(&mut self) {
        if self.cursor > 0 {
            log::debug!("dynamic uniform buffer: discarding {} unflushed words", self.cursor);
        }
        self.cursor = 0;
    }

    /// Releases the device buffer. The allocator stays usable and recreates it on demand.
    pub fn destroy(&mut self, device: &mut dyn GfxDevice) {
        if let Some(buffer) = self.buffer.take() {
            device.destroy_buffer(buffer);
        }
        self.buffer_words = 0;
        self.cursor = 0;
        self.last_flush_words = 0;
    }

    fn live_range(&self, word_offset: u32, word_count: u32) -> Range<usize> {
        let end = word_offset.checked_add(word_count);
        assert!(
            end.is_some_and(|end| end <= self.cursor),
            "uniform range at word {word_offset} (+{word_count}) was not allocated in the current frame"
        );
        word_offset as usize..(word_offset + word_count) as usize
    }

    fn ensure_shadow_capacity(&mut self, words: u32) {
        let capacity = self.capacity_words();
        if words <= capacity {
            return;
        }

        // Geometric growth keeps reallocation amortized over a frame.
        let new_capacity = align(words.max(capacity.saturating_mul(2)), self.word_alignment);
        log::debug!("dynamic uniform buffer: shadow {capacity} -> {new_capacity} words");
        self.shadow.resize(new_capacity as usize, 0.0);
    }
}

#[inline]
fn align(n: u32, multiple: u32) -> u32 {
    n.div_ceil(multiple) * multiple
}
