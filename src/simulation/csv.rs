// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use crate::models::trajectory::Point2;
use crate::simulation::framework::Frame;
use crate::simulation::sampler::SampledSeries;

/// CSV出力の設定とヘッダーの書き込み
pub fn setup_csv_output(
    path: impl AsRef<Path>,
    header: &str,
) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(output_file);
    writer.write_all(header.as_bytes())?;
    Ok(Box::new(writer))
}

/// 描画点列のヘッダー（index は間引き前の軌跡の index）
pub const SERIES_HEADER: &str = "index,x(m),y(m)\n";
/// フレーム列のヘッダー
pub const FRAMES_HEADER: &str = "frame,x(m),y(m),limit(m)\n";

/// 描画点列の1行
pub fn create_series_row(index: usize, point: &Point2) -> String {
    format!("{},{},{}\n", index, point.x, point.y)
}

/// フレームの1行
pub fn create_frame_row(frame: &Frame) -> String {
    format!(
        "{},{},{},{}\n",
        frame.frame, frame.point.x, frame.point.y, frame.limit
    )
}

/// 描画点列の書き込み
pub fn write_series<W: Write + ?Sized>(
    writer: &mut W,
    series: &SampledSeries,
) -> Result<(), std::io::Error> {
    for (index, point) in series.indexed_tail() {
        writer.write_all(create_series_row(index, point).as_bytes())?;
    }
    writer.flush()
}

/// フレーム列の書き込み
pub fn write_frames<W: Write + ?Sized>(writer: &mut W, frames: &[Frame]) -> Result<(), std::io::Error> {
    for frame in frames {
        writer.write_all(create_frame_row(frame).as_bytes())?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::NonZeroUsize;

    #[test]
    fn test_create_series_row() {
        let row = create_series_row(3, &Point2::new(0.5, -1.25));
        assert_eq!(row, "3,0.5,-1.25\n");
    }

    #[test]
    fn test_write_series_and_frames() {
        let series = SampledSeries {
            tail: vec![Point2::new(2.0, 0.0), Point2::new(1.0, 1.0)],
            stride: NonZeroUsize::MIN,
            cursor: None,
        };
        let mut buffer: Vec<u8> = SERIES_HEADER.as_bytes().to_vec();
        write_series(&mut buffer, &series).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "index,x(m),y(m)\n0,2,0\n1,1,1\n"
        );

        let strided = SampledSeries {
            stride: NonZeroUsize::new(5).unwrap(),
            ..series
        };
        let mut buffer = Vec::new();
        write_series(&mut buffer, &strided).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0,2,0\n5,1,1\n");

        let frames = [Frame {
            frame: 0,
            point: Point2::new(0.067, 0.1),
            limit: 0.15,
        }];
        let mut buffer = Vec::new();
        write_frames(&mut buffer, &frames).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "0,0.067,0.1,0.15\n");
    }
}
