use std::marker::PhantomData;
use std::num::NonZeroU64;

use bytemuck::Pod;

/// Rounds `size` up to the next multiple of `alignment`.
///
/// `alignment == 0` is treated as 1.
pub(crate) fn aligned_stride(size: u64, alignment: u64) -> u64 {
    size.div_ceil(alignment.max(1)) * alignment.max(1)
}

/// Uniform buffer holding one `T` per draw call.
///
/// Slots are spaced by the device's `min_uniform_buffer_offset_alignment`, so
/// each draw can select its value with a dynamic offset instead of rebinding.
/// The bind group layout entry must set `has_dynamic_offset: true` (see
/// [`DynamicUniformBuffer::layout_entry`]).
pub struct DynamicUniformBuffer<T: Pod> {
    buffer: wgpu::Buffer,
    stride: u64,
    capacity: usize,
    staging: Vec<u8>,
    _marker: PhantomData<T>,
}

impl<T: Pod> DynamicUniformBuffer<T> {
    pub fn new(device: &wgpu::Device, label: &str, capacity: usize) -> Self {
        let alignment = device.limits().min_uniform_buffer_offset_alignment as u64;
        let stride = aligned_stride(std::mem::size_of::<T>() as u64, alignment);
        let capacity = capacity.max(1);

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: stride * capacity as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            stride,
            capacity,
            staging: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Size of one `T` as seen by the shader binding.
    fn binding_size() -> NonZeroU64 {
        NonZeroU64::new(std::mem::size_of::<T>() as u64).unwrap_or(NonZeroU64::MIN)
    }

    /// Layout entry for a dynamically offset uniform of type `T`.
    pub fn layout_entry(binding: u32, visibility: wgpu::ShaderStages) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: true,
                min_binding_size: Some(Self::binding_size()),
            },
            count: None,
        }
    }

    /// Binding resource covering exactly one slot; pair with [`Self::offset`].
    pub fn binding(&self) -> wgpu::BindingResource<'_> {
        wgpu::BindingResource::Buffer(wgpu::BufferBinding {
            buffer: &self.buffer,
            offset: 0,
            size: Some(Self::binding_size()),
        })
    }

    /// Dynamic offset of slot `index`.
    pub fn offset(&self, index: usize) -> wgpu::DynamicOffset {
        debug_assert!(index < self.capacity);
        (self.stride * index as u64) as wgpu::DynamicOffset
    }

    /// Uploads `values` into slots `0..values.len()`.
    ///
    /// Values past `capacity` are dropped with a warning.
    pub fn write(&mut self, queue: &wgpu::Queue, values: &[T]) {
        let values = if values.len() > self.capacity {
            log::warn!(
                "dynamic uniform buffer holds {} slots, {} given; extra dropped",
                self.capacity,
                values.len()
            );
            &values[..self.capacity]
        } else {
            values
        };

        if values.is_empty() {
            return;
        }

        pack_slots(values, self.stride as usize, &mut self.staging);
        queue.write_buffer(&self.buffer, 0, &self.staging);
    }
}

/// Lays `values` out in `out` at `stride`-byte intervals, zero-padding each slot.
fn pack_slots<T: Pod>(values: &[T], stride: usize, out: &mut Vec<u8>) {
    out.clear();
    out.resize(stride * values.len(), 0);
    for (slot, value) in out.chunks_exact_mut(stride).zip(values) {
        let bytes = bytemuck::bytes_of(value);
        slot[..bytes.len()].copy_from_slice(bytes);
    }
}
