use crate::device::{BufferFrequencyHint, BufferId, BufferUsage, GfxDevice};

/// Creates a static buffer sized to `data` (rounded up to whole words) and uploads it.
pub fn make_static_data_buffer(device: &mut dyn GfxDevice, usage: BufferUsage, data: &[u8]) -> BufferId {
    let word_count = data.len().div_ceil(4) as u32;
    let buffer = device.create_buffer(word_count, usage, BufferFrequencyHint::Static);
    if !data.is_empty() {
        device.upload_buffer_data(buffer, 0, data);
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::mock::MockDevice;

    #[test]
    fn size_rounds_up_to_words() {
        let mut device = MockDevice::default();
        let buffer = make_static_data_buffer(&mut device, BufferUsage::Vertex, &[1, 2, 3, 4, 5]);
        assert_eq!(device.buffers_created, vec![(buffer, 2, BufferUsage::Vertex)]);
        assert_eq!(device.uploads[0].data, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_data_skips_upload() {
        let mut device = MockDevice::default();
        make_static_data_buffer(&mut device, BufferUsage::Index, &[]);
        assert_eq!(device.buffers_created[0].1, 0);
        assert!(device.uploads.is_empty());
    }
}
