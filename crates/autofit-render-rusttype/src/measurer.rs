use std::borrow::Borrow;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use autofit_text::{validate_font_size, MeasurementError, TextMeasurer, TextMetrics};
use lru::LruCache;
use rusttype::{point, Font, Scale};

pub const DEFAULT_CACHE_CAPACITY: usize = 256;

pub struct RusttypeTextMeasurer {
    font: Font<'static>,
    cache: Mutex<TextMetricsCache>,
}

#[derive(Clone)]
struct TextKey {
    text: Arc<str>,
    size_bits: u32,
}

impl PartialEq for TextKey {
    fn eq(&self, other: &Self) -> bool {
        self.size_bits == other.size_bits
            && (Arc::ptr_eq(&self.text, &other.text) || *self.text == *other.text)
    }
}

impl Eq for TextKey {}

impl Hash for TextKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Borrowed form of [`TextKey`] so lookups don't allocate.
#[derive(PartialEq, Eq, Hash)]
struct KeyRef<'a> {
    text: &'a str,
    size_bits: u32,
}

trait AsKeyRef {
    fn key(&self) -> KeyRef<'_>;
}

impl AsKeyRef for TextKey {
    fn key(&self) -> KeyRef<'_> {
        KeyRef {
            text: &self.text,
            size_bits: self.size_bits,
        }
    }
}

impl AsKeyRef for KeyRef<'_> {
    fn key(&self) -> KeyRef<'_> {
        KeyRef {
            text: self.text,
            size_bits: self.size_bits,
        }
    }
}

impl<'a> Borrow<dyn AsKeyRef + 'a> for TextKey {
    fn borrow(&self) -> &(dyn AsKeyRef + 'a) {
        self
    }
}

impl PartialEq for dyn AsKeyRef + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for dyn AsKeyRef + '_ {}

impl Hash for dyn AsKeyRef + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

struct TextMetricsCache {
    map: LruCache<TextKey, TextMetrics>,
}

impl TextMetricsCache {
    fn new(capacity: usize) -> Self {
        let size = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            map: LruCache::new(size),
        }
    }

    fn get_or_measure<F>(&mut self, text: &str, font_size: f32, measure: F) -> TextMetrics
    where
        F: FnOnce(&str, f32) -> TextMetrics,
    {
        let lookup = KeyRef {
            text,
            size_bits: font_size.to_bits(),
        };
        if let Some(metrics) = self.map.get(&lookup as &dyn AsKeyRef).copied() {
            return metrics;
        }
        let key = TextKey {
            text: Arc::from(text),
            size_bits: font_size.to_bits(),
        };
        let metrics = measure(text, font_size);
        self.map.put(key, metrics);
        metrics
    }

    fn len(&self) -> usize {
        self.map.len()
    }
}

impl RusttypeTextMeasurer {
    /// Loads a TrueType/OpenType font from memory.
    pub fn from_bytes(bytes: Vec<u8>, cache_capacity: usize) -> Result<Self, MeasurementError> {
        let font = Font::try_from_vec(bytes).ok_or_else(|| {
            MeasurementError::FontUnavailable("data is not a supported font".to_owned())
        })?;
        Ok(Self {
            font,
            cache: Mutex::new(TextMetricsCache::new(cache_capacity)),
        })
    }

    pub fn from_file(
        path: impl AsRef<Path>,
        cache_capacity: usize,
    ) -> Result<Self, MeasurementError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|err| {
            MeasurementError::FontUnavailable(format!("{}: {err}", path.display()))
        })?;
        let measurer = Self::from_bytes(bytes, cache_capacity)?;
        log::info!("loaded font {}", path.display());
        Ok(measurer)
    }

    /// Number of memoised measurements.
    pub fn cached_entries(&self) -> usize {
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn measure_uncached(&self, text: &str, font_size: f32) -> TextMetrics {
        let scale = Scale::uniform(font_size);
        let v_metrics = self.font.v_metrics(scale);
        let line_height = (v_metrics.ascent - v_metrics.descent).ceil();

        // Split by newlines for multiline support
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        // Measure max width across all lines
        let mut max_width: f32 = 0.0;
        for line in &lines {
            let origin = point(0.0, v_metrics.ascent);
            let mut min_x: f32 = f32::INFINITY;
            let mut line_max_x: f32 = 0.0;
            let mut glyph_count = 0_u32;

            for glyph in self.font.layout(line, scale, origin) {
                glyph_count += 1;
                if let Some(bb) = glyph.pixel_bounding_box() {
                    min_x = min_x.min(bb.min.x as f32);
                    line_max_x = line_max_x.max(bb.max.x as f32);
                }
            }

            let line_width = if glyph_count == 0 {
                0.0
            } else if min_x.is_infinite() {
                line_max_x
            } else {
                (line_max_x - min_x).max(0.0)
            };
            max_width = max_width.max(line_width);
        }

        TextMetrics {
            width: max_width,
            height: line_count as f32 * line_height,
            line_height,
            line_count,
        }
    }
}

impl TextMeasurer for RusttypeTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> Result<TextMetrics, MeasurementError> {
        validate_font_size(font_size)?;
        let metrics = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_measure(text, font_size, |text, size| self.measure_uncached(text, size));
        Ok(metrics)
    }
}
