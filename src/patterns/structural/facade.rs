use crate::core::context::DemoContext;
use crate::domain::model::{Category, DemoInfo};
use crate::domain::ports::Demo;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoFile {
    name: String,
    codec_type: String,
}

impl VideoFile {
    pub fn new(name: &str) -> Self {
        let codec_type = name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
        Self {
            name: name.to_string(),
            codec_type: codec_type.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn codec_type(&self) -> &str {
        &self.codec_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Mpeg4,
    Ogg,
}

impl Codec {
    pub fn for_format(format: &str) -> Self {
        if format == "mp4" {
            Codec::Mpeg4
        } else {
            Codec::Ogg
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Codec::Mpeg4 => "mp4",
            Codec::Ogg => "ogg",
        }
    }
}

// 以下是複雜的子系統

pub struct CodecFactory;

impl CodecFactory {
    pub fn extract(ctx: &mut DemoContext<'_>, file: &VideoFile) -> Codec {
        let codec = Codec::for_format(file.codec_type());
        match codec {
            Codec::Mpeg4 => ctx.say("CodecFactory: extracting mpeg audio..."),
            Codec::Ogg => ctx.say("CodecFactory: extracting ogg audio..."),
        }
        codec
    }
}

pub struct BitrateReader;

impl BitrateReader {
    pub fn read(ctx: &mut DemoContext<'_>, file: VideoFile, _codec: Codec) -> VideoFile {
        ctx.say("BitrateReader: reading file...");
        file
    }

    pub fn convert(ctx: &mut DemoContext<'_>, buffer: VideoFile, codec: Codec) -> VideoFile {
        ctx.say("BitrateReader: writing file...");
        let stem = buffer
            .name()
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(buffer.name());
        VideoFile::new(&format!("{}.{}", stem, codec.type_name()))
    }
}

pub struct AudioMixer;

impl AudioMixer {
    pub fn fix(ctx: &mut DemoContext<'_>, result: VideoFile) -> VideoFile {
        ctx.say("AudioMixer: fixing audio...");
        result
    }
}

/// One call instead of four subsystems.
pub struct VideoConversionFacade;

impl VideoConversionFacade {
    pub fn convert_video(ctx: &mut DemoContext<'_>, file_name: &str, format: &str) -> VideoFile {
        ctx.say("VideoConversionFacade: conversion started.");
        let file = VideoFile::new(file_name);
        let source_codec = CodecFactory::extract(ctx, &file);
        let destination_codec = Codec::for_format(format);

        let buffer = BitrateReader::read(ctx, file, source_codec);
        let intermediate = BitrateReader::convert(ctx, buffer, destination_codec);
        let result = AudioMixer::fix(ctx, intermediate);
        ctx.say("VideoConversionFacade: conversion completed.");
        result
    }
}

pub struct FacadeDemo;

impl Demo for FacadeDemo {
    fn info(&self) -> DemoInfo {
        DemoInfo {
            name: "facade-video",
            pattern: "Facade",
            category: Category::Structural,
            summary: "One conversion call hides codecs, bitrate readers and mixers",
            interactive: false,
        }
    }

    fn run(&self, ctx: &mut DemoContext<'_>) -> Result<()> {
        let video = VideoConversionFacade::convert_video(ctx, "youtubevideo.ogg", "mp4");
        tracing::debug!("🎬 Converted video: {}", video.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::console::BufferConsole;
    use crate::core::context::DemoSettings;

    #[test]
    fn test_codec_comes_from_extension() {
        assert_eq!(VideoFile::new("clip.mp4").codec_type(), "mp4");
        assert_eq!(VideoFile::new("noext").codec_type(), "");
    }

    #[test]
    fn test_conversion_renames_file() {
        let mut console = BufferConsole::new();
        let mut ctx = DemoContext::new(&mut console, DemoSettings::default());
        let video = VideoConversionFacade::convert_video(&mut ctx, "talk.ogg", "mp4");
        assert_eq!(video.name(), "talk.mp4");
        assert_eq!(video.codec_type(), "mp4");
    }
}
