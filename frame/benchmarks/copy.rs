//! Benchmarks deep copies, pastes and sub-frame copies.
use brunch::Bench;

use image_frame::{CopyMode, Frame, FrameError, FrameType, PixelFormat, PixelOrigin};

#[derive(Clone, Copy, Debug)]
enum Operation {
    /// Copy into a frame that already holds memory of the right size.
    CopyFrom,
    /// Paste a frame offset by a quarter of its size.
    CopyAt,
    /// Copy the center quarter into a new continuous frame.
    SubFrame,
}

struct CopyBench {
    operation: Operation,
    format: PixelFormat,
    padding: u32,
    sz: u32,
}

impl CopyBench {
    fn name(&self) -> String {
        format!(
            "{:?}({}, padding {}, {})",
            self.operation, self.format, self.padding, self.sz
        )
    }

    fn prepare(self) -> Result<impl FnMut(), FrameError> {
        let frame_type = FrameType::new(self.sz, self.sz, self.format, PixelOrigin::UpperLeft);
        let mut source = Frame::with_padding(frame_type, &[self.padding; 3])?;
        for plane in 0..source.number_planes() {
            source.fill(0x5a, plane, true)?;
        }

        let mut into = source.to_owned_frame()?;
        let (operation, offset) = (self.operation, (self.sz / 4) as i32);

        Ok(move || match operation {
            Operation::CopyFrom => into.copy_from(&source, true).unwrap(),
            Operation::CopyAt => into.copy_at(offset, offset, &source, false).unwrap(),
            Operation::SubFrame => {
                let quarter = offset as u32;
                let mode = CopyMode::CopyRemovePaddingLayout;
                let copy = source
                    .sub_frame(quarter, quarter, 2 * quarter, 2 * quarter, mode)
                    .unwrap();
                std::hint::black_box(copy);
            }
        })
    }
}

fn main() {
    let tests = [
        // Continuous planes copy as one block.
        CopyBench {
            operation: Operation::CopyFrom,
            format: PixelFormat::RGB24,
            padding: 0,
            sz: 512,
        },
        CopyBench {
            operation: Operation::CopyFrom,
            format: PixelFormat::RGB24,
            padding: 16,
            sz: 512,
        },
        CopyBench {
            operation: Operation::CopyFrom,
            format: PixelFormat::Y_UV12,
            padding: 0,
            sz: 512,
        },
        CopyBench {
            operation: Operation::CopyAt,
            format: PixelFormat::RGBA32,
            padding: 0,
            sz: 512,
        },
        CopyBench {
            operation: Operation::CopyAt,
            format: PixelFormat::Y_U_V12,
            padding: 8,
            sz: 512,
        },
        CopyBench {
            operation: Operation::SubFrame,
            format: PixelFormat::Y8,
            padding: 0,
            sz: 1024,
        },
        CopyBench {
            operation: Operation::SubFrame,
            format: PixelFormat::Y_UV12,
            padding: 32,
            sz: 1024,
        },
    ];

    let mut benches = brunch::Benches::default();
    benches.extend(tests.map(|copy| {
        Bench::new(format!("frame::copy::main::{}", copy.name()))
            .run(copy.prepare().expect("Failed to setup benchmark"))
    }));
    benches.finish();
}
