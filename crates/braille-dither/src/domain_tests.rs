//! Domain-critical regression tests for braille-dither.
//!
//! Each test documents the class of bug it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::{render, RenderConfig};
    use crate::dither::Style;
    use crate::output::{needs_invert, RenderOutput, Theme};
    use crate::source::{PixelBuffer, Rgba8};

    /// Count raised dots over the whole output.
    fn dot_count(output: &RenderOutput) -> u32 {
        output
            .rows()
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| (c as u32 - 0x2800).count_ones())
            .sum()
    }

    fn uniform(value: u8) -> PixelBuffer {
        PixelBuffer::filled(8, 8, Rgba8::gray(value))
    }

    /// Dark theme without invert leaves dots uninverted, which keeps the
    /// assertions below in "dot = dark sample" terms.
    fn raw(width: usize, height: usize, style: Style) -> RenderConfig {
        RenderConfig::new(width, height)
            .style(style)
            .theme(Theme::Dark)
    }

    // ========================================================================
    // End-to-end scenario
    // ========================================================================

    /// If this breaks, the perceptual threshold or the theme inversion has
    /// changed. Gray 188 has linear luminance ~0.503 and CIE lightness ~76,
    /// which is above the stored exposure of 50, so every dot is off before
    /// inversion. The light theme then flips every cell.
    #[test]
    fn test_mid_gray_brightness_scenario() {
        let image = PixelBuffer::filled(4, 8, Rgba8::gray(188));
        let config = RenderConfig::new(2, 2).style(Style::Brightness);

        assert!(config.needs_invert());
        let output = render(&image, &config);
        assert_eq!(output.rows(), &["⣿⣿".to_string(), "⣿⣿".to_string()]);

        let dark = render(&image, &config.theme(Theme::Dark));
        assert_eq!(dark.rows(), &["⠀⠀".to_string(), "⠀⠀".to_string()]);
    }

    #[test]
    fn test_needs_invert_truth_table() {
        let table = [
            (false, Theme::Light, true),
            (false, Theme::Dark, false),
            (true, Theme::Light, false),
            (true, Theme::Dark, true),
        ];
        for (invert, theme, expected) in table {
            assert_eq!(
                needs_invert(invert, theme),
                expected,
                "needs_invert({invert}, {theme})"
            );
        }
    }

    // ========================================================================
    // Gamma: thresholding must operate on linear luminance
    // ========================================================================

    /// If this breaks, samples are being compared in gamma-encoded sRGB
    /// instead of linear light. Error diffusion preserves the mean, so the
    /// fraction of raised dots tracks `1 - luminance`. sRGB 128 is ~0.216
    /// linear and must raise ~78% of the dots; in sRGB space it would be
    /// ~50%.
    #[test]
    fn test_dot_density_tracks_linear_luminance() {
        let total = (64 * 64) as f64;
        let diffusing = [
            Style::Normal,
            Style::HighContrast,
            Style::EdgeContrast,
            Style::Smooth,
        ];

        for style in diffusing {
            for (gray, luminance) in [(188u8, 0.503), (128u8, 0.216)] {
                let image = PixelBuffer::filled(1, 1, Rgba8::gray(gray));
                let output = render(&image, &raw(32, 16, style));
                let density = dot_count(&output) as f64 / total;

                assert!(
                    (density - (1.0 - luminance)).abs() < 0.1,
                    "REGRESSION: {style} on gray {gray} raised {density:.3} of dots, \
                     expected ~{:.3}",
                    1.0 - luminance
                );
            }
        }
    }

    // ========================================================================
    // Uniform inputs
    // ========================================================================

    #[test]
    fn test_uniform_black_is_full_for_every_style() {
        for style in Style::ALL {
            let output = render(&uniform(0), &raw(3, 2, style));
            for row in output.rows() {
                assert_eq!(row, "⣿⣿⣿", "{style}");
            }
        }
    }

    #[test]
    fn test_uniform_white_is_empty_for_every_style() {
        for style in Style::ALL {
            let output = render(&uniform(255), &raw(3, 2, style));
            for row in output.rows() {
                assert_eq!(row, "⠀⠀⠀", "{style}");
            }
        }
    }

    /// If this breaks, alpha is no longer composited on white before the
    /// luminance computation. Fully transparent black must read as white.
    #[test]
    fn test_transparent_pixels_read_as_white() {
        let image = PixelBuffer::filled(2, 2, Rgba8::new(0, 0, 0, 0));
        let output = render(&image, &raw(2, 1, Style::Normal));
        assert_eq!(output.rows(), &["⠀⠀".to_string()]);
    }

    // ========================================================================
    // Structure
    // ========================================================================

    /// A hard black/white edge must stay exactly on the cell boundary for
    /// every style: error from a saturated sample is zero.
    #[test]
    fn test_hard_edge_stays_sharp() {
        let image = PixelBuffer::from_fn(16, 16, |x, _| Rgba8::gray(if x < 8 { 0 } else { 255 }));
        for style in Style::ALL {
            let output = render(&image, &raw(4, 2, style));
            assert_eq!(
                output.rows(),
                &["⣿⣿⠀⠀".to_string(), "⣿⣿⠀⠀".to_string()],
                "{style}"
            );
        }
    }

    /// If this breaks, the visiting order, the bit layout or a kernel table
    /// changed. The expected rows pin the exact output of a horizontal
    /// ramp under Floyd-Steinberg in cell order.
    #[test]
    fn test_ramp_golden_floyd_steinberg() {
        let image = PixelBuffer::from_fn(32, 8, |x, _| Rgba8::gray((x * 8) as u8));
        let output = render(&image, &raw(8, 2, Style::Normal));
        assert_eq!(
            output.rows(),
            &["⣿⣿⣿⡿⡽⡪⡪⠀".to_string(), "⣿⣿⣿⣟⣽⡣⡣⠁".to_string()]
        );
    }

    /// Brightness has no diffusion: the ramp splits at the column where CIE
    /// lightness crosses the threshold.
    #[test]
    fn test_ramp_brightness_is_a_clean_threshold() {
        let image = PixelBuffer::from_fn(32, 8, |x, _| Rgba8::gray((x * 8) as u8));
        let output = render(&image, &raw(8, 2, Style::Brightness));
        assert_eq!(
            output.rows(),
            &["⣿⣿⣿⣿⠀⠀⠀⠀".to_string(), "⣿⣿⣿⣿⠀⠀⠀⠀".to_string()]
        );
    }

    #[test]
    fn test_output_shape_and_codepoint_range() {
        let image = PixelBuffer::from_fn(37, 23, |x, y| {
            Rgba8::new((x * 7) as u8, (y * 11) as u8, ((x + y) * 3) as u8, 200)
        });
        for style in Style::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                let config = RenderConfig::new(13, 7).style(style).theme(theme);
                let output = render(&image, &config);

                assert_eq!(output.height(), 7);
                for row in output.rows() {
                    assert_eq!(row.chars().count(), 13);
                    assert!(row.chars().all(|c| ('\u{2800}'..='\u{28FF}').contains(&c)));
                }
            }
        }
    }

    /// If this breaks, a kernel writes outside the 2x4 grid of a single
    /// cell instead of dropping the error (would panic on indexing).
    #[test]
    fn test_single_cell_for_every_style() {
        for style in Style::ALL {
            for gray in [0u8, 64, 100, 128, 200, 255] {
                let image = PixelBuffer::filled(3, 3, Rgba8::gray(gray));
                let output = render(&image, &raw(1, 1, style));
                assert_eq!(output.width(), 1);
                assert_eq!(output.height(), 1);
            }
        }
    }

    /// Upsampling a 1x1 source by a large factor must never sample past
    /// the last source pixel.
    #[test]
    fn test_extreme_upsampling() {
        let image = PixelBuffer::filled(1, 1, Rgba8::gray(0));
        let output = render(&image, &raw(50, 25, Style::Normal));
        assert_eq!(output.height(), 25);
        assert!(output.rows().iter().all(|row| row.chars().all(|c| c == '⣿')));
    }

    #[test]
    fn test_render_is_deterministic() {
        let image = PixelBuffer::from_fn(40, 30, |x, y| Rgba8::gray(((x * y) % 256) as u8));
        for style in Style::ALL {
            let config = RenderConfig::new(10, 5).style(style).exposure(37.0);
            assert_eq!(render(&image, &config), render(&image, &config), "{style}");
        }
    }

    /// Light and dark themes without invert must be exact complements.
    #[test]
    fn test_themes_are_complements() {
        let image = PixelBuffer::from_fn(20, 20, |x, y| Rgba8::gray(((x + y) * 6) as u8));
        let config = RenderConfig::new(5, 3).style(Style::Smooth);
        let mut light = render(&image, &config);
        let dark = render(&image, &config.theme(Theme::Dark));

        assert_ne!(light, dark);
        light.invert();
        assert_eq!(light, dark);
    }

    /// Raising the stored exposure can only raise more dots when there is
    /// no diffusion.
    #[test]
    fn test_brightness_exposure_is_monotonic() {
        let image = PixelBuffer::from_fn(32, 8, |x, _| Rgba8::gray((x * 8) as u8));
        let mut previous = 0;
        for exposure in [0.0, 20.0, 40.0, 60.0, 80.0, 100.0] {
            let output = render(&image, &raw(8, 2, Style::Brightness).exposure(exposure));
            let dots = dot_count(&output);
            assert!(dots >= previous, "exposure {exposure}: {dots} < {previous}");
            previous = dots;
        }
    }
}
