use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::{CatalogError, Result};
use base64::{engine::general_purpose, Engine as _};
use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

pub const OUTPUT_FILE: &str = "output_demo.txt";

pub trait DataSource {
    fn write_data(&self, data: &str) -> Result<()>;
    fn read_data(&self) -> Result<String>;
}

pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileDataSource {
    fn write_data(&self, data: &str) -> Result<()> {
        tracing::debug!("💾 Writing {} bytes to {}", data.len(), self.path.display());
        std::fs::write(&self.path, data)?;
        Ok(())
    }

    fn read_data(&self) -> Result<String> {
        Ok(std::fs::read_to_string(&self.path)?)
    }
}

fn encode_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

fn decode_base64(data: &str) -> Result<Vec<u8>> {
    general_purpose::STANDARD
        .decode(data.trim())
        .map_err(|e| CatalogError::codec(format!("Base64 decoding failed: {}", e)))
}

fn into_utf8(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| CatalogError::codec(format!("Invalid UTF-8: {}", e)))
}

/// Base64 stands in for real encryption.
pub struct EncryptionDecorator {
    wrappee: Box<dyn DataSource>,
}

impl EncryptionDecorator {
    pub fn new(wrappee: Box<dyn DataSource>) -> Self {
        Self { wrappee }
    }
}

impl DataSource for EncryptionDecorator {
    fn write_data(&self, data: &str) -> Result<()> {
        self.wrappee.write_data(&encode_base64(data.as_bytes()))
    }

    fn read_data(&self) -> Result<String> {
        let data = self.wrappee.read_data()?;
        into_utf8(decode_base64(&data)?)
    }
}

/// zlib, then base64 so the result stays text.
pub struct CompressionDecorator {
    wrappee: Box<dyn DataSource>,
    level: u32,
}

impl CompressionDecorator {
    pub const DEFAULT_LEVEL: u32 = 6;

    pub fn new(wrappee: Box<dyn DataSource>) -> Self {
        Self {
            wrappee,
            level: Self::DEFAULT_LEVEL,
        }
    }

    pub fn set_compress_level(&mut self, level: u32) {
        self.level = level.min(9);
    }

    pub fn compress_level(&self) -> u32 {
        self.level
    }

    fn compress(&self, data: &str) -> Result<String> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::new(self.level));
        encoder
            .write_all(data.as_bytes())
            .map_err(|e| CatalogError::codec(format!("Compression failed: {}", e)))?;
        let compressed = encoder
            .finish()
            .map_err(|e| CatalogError::codec(format!("Compression finalization failed: {}", e)))?;
        Ok(encode_base64(&compressed))
    }

    fn decompress(&self, data: &str) -> Result<String> {
        let compressed = decode_base64(data)?;
        let mut decoder = ZlibDecoder::new(compressed.as_slice());
        let mut decompressed = Vec::new();
        decoder
            .read_to_end(&mut decompressed)
            .map_err(|e| CatalogError::codec(format!("Decompression failed: {}", e)))?;
        into_utf8(decompressed)
    }
}

impl DataSource for CompressionDecorator {
    fn write_data(&self, data: &str) -> Result<()> {
        let compressed = self.compress(data)?;
        self.wrappee.write_data(&compressed)
    }

    fn read_data(&self) -> Result<String> {
        let data = self.wrappee.read_data()?;
        self.decompress(&data)
    }
}

pub struct DataSourceDemo;

impl Demo for DataSourceDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "decorator-data-source",
            pattern: "Decorator",
            category: Category::Structural,
            summary: "Compression and encryption wrappers stack on top of a file",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let file_path = ctx.scratch_dir().join(OUTPUT_FILE);
        let salary_records = "Name,Salary\nJohn Smith,100000\nSteven Jobs,912000";

        let encoded = CompressionDecorator::new(Box::new(EncryptionDecorator::new(Box::new(
            FileDataSource::new(&file_path),
        ))));
        encoded.write_data(salary_records)?;

        let plain = FileDataSource::new(&file_path);

        ctx.say("- Input -------------------");
        ctx.say(salary_records);
        ctx.say("- Encoded -----------------");
        ctx.say(plain.read_data()?);
        ctx.say("- Decoded ------------------");
        let decoded = encoded.read_data()?;
        ctx.say(&decoded);

        if decoded != salary_records {
            return Err(CatalogError::codec("Decoded text differs from the input"));
        }
        Ok(())
    }
}

// 視窗裝飾

pub trait Window {
    fn build(&self, ctx: &mut DemoContext<'_>);
}

pub struct SimpleWindow;

impl Window for SimpleWindow {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Building a window");
    }
}

pub struct BorderDecorator<W: Window> {
    window: W,
}

pub struct VerticalScrollBarDecorator<W: Window> {
    window: W,
}

pub struct HorizontalScrollBarDecorator<W: Window> {
    window: W,
}

impl<W: Window> BorderDecorator<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }
}

impl<W: Window> VerticalScrollBarDecorator<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }
}

impl<W: Window> HorizontalScrollBarDecorator<W> {
    pub fn new(window: W) -> Self {
        Self { window }
    }
}

impl<W: Window> Window for BorderDecorator<W> {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Adding border");
        self.window.build(ctx);
    }
}

impl<W: Window> Window for VerticalScrollBarDecorator<W> {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Adding vertical scroll bar");
        self.window.build(ctx);
    }
}

impl<W: Window> Window for HorizontalScrollBarDecorator<W> {
    fn build(&self, ctx: &mut DemoContext<'_>) {
        ctx.say("Adding horizontal scroll bar");
        self.window.build(ctx);
    }
}

pub struct WindowDecoratorDemo;

impl Demo for WindowDecoratorDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "decorator-windows",
            pattern: "Decorator",
            category: Category::Structural,
            summary: "Borders and scroll bars wrap a window one layer at a time",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let windows: Vec<Box<dyn Window>> = vec![
            Box::new(SimpleWindow),
            Box::new(BorderDecorator::new(SimpleWindow)),
            Box::new(VerticalScrollBarDecorator::new(SimpleWindow)),
            Box::new(HorizontalScrollBarDecorator::new(SimpleWindow)),
            Box::new(HorizontalScrollBarDecorator::new(
                VerticalScrollBarDecorator::new(BorderDecorator::new(SimpleWindow)),
            )),
        ];

        for window in windows {
            window.build(ctx);
        }
        Ok(())
    }
}
