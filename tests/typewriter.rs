mod tests {
    use myrtio_keylight::geometry::{NUM_COLUMNS, NUM_ROWS};
    use myrtio_keylight::profile::TypewriterProfile;
    use myrtio_keylight::{KeyFrame, NaiveDim, Profile, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn glyph(brightness: u8) -> Rgb {
        Rgb {
            r: brightness,
            g: 0,
            b: 0,
        }
    }

    fn lit_keys(frame: &KeyFrame) -> usize {
        frame.leds().iter().filter(|led| **led != BLACK).count()
    }

    fn active() -> (TypewriterProfile, KeyFrame) {
        let mut frame = KeyFrame::new();
        let mut profile = TypewriterProfile::new();
        profile.init(&mut frame);
        (profile, frame)
    }

    #[test]
    fn test_init_resets_cursor() {
        let (profile, frame) = active();

        assert_eq!(profile.position(), 0);
        assert_eq!(profile.phase(), 0);
        assert_eq!(profile.highlight(), None);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_keypresses_advance_cursor() {
        let (mut profile, mut frame) = active();

        for expected in 1..=7 {
            profile.keypress(&mut frame, 1, 0);
            assert_eq!(profile.position(), expected);
            assert!(frame.is_blank());
        }
        assert!(!profile.is_sweeping());
    }

    #[test]
    fn test_keypress_at_line_end_wraps_into_sweep() {
        let (mut profile, mut frame) = active();
        for _ in 0..12 {
            profile.keypress(&mut frame, 0, 0);
        }
        assert_eq!(profile.position(), 12);

        profile.keypress(&mut frame, 0, 0);

        assert_eq!(profile.position(), -14);
        assert!(profile.is_sweeping());
    }

    #[test]
    fn test_sweep_in_moves_two_columns_per_tick() {
        let (mut profile, mut frame) = active();
        for _ in 0..13 {
            profile.keypress(&mut frame, 3, 0);
        }

        // Both marker columns are past the grid on the first step
        profile.tick(&mut frame);
        assert_eq!(profile.position(), -12);
        assert!(frame.is_blank());

        profile.tick(&mut frame);
        assert_eq!(profile.position(), -10);
        assert_eq!(frame.get(0, 12), Some(RED));
        assert_eq!(frame.get(0, 13), Some(RED));
        assert_eq!(lit_keys(&frame), 2);

        for expected in [-8, -6, -4, -2, 0] {
            profile.tick(&mut frame);
            assert_eq!(profile.position(), expected);
            assert_eq!(profile.phase(), 0);
            assert_eq!(profile.highlight(), Some(3));
        }
        assert_eq!(frame.get(0, 2), Some(RED));
        assert_eq!(frame.get(0, 3), Some(RED));
        assert_eq!(lit_keys(&frame), 2);
    }

    #[test]
    fn test_typing_resumes_after_sweep() {
        let (mut profile, mut frame) = active();
        for _ in 0..13 {
            profile.keypress(&mut frame, 3, 0);
        }
        for _ in 0..7 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.position(), 0);

        profile.tick(&mut frame);

        assert_eq!(profile.phase(), 1);
        assert_eq!(profile.highlight(), None);
        assert_eq!(frame.get(0, 0), Some(glyph(51)));
        for col in 0..NUM_COLUMNS {
            assert_eq!(frame.get(3, col), Some(GREEN));
        }
    }

    #[test]
    fn test_keypress_during_sweep_keeps_position() {
        let (mut profile, mut frame) = active();
        for _ in 0..13 {
            profile.keypress(&mut frame, 0, 0);
        }
        profile.tick(&mut frame);
        profile.tick(&mut frame);

        profile.keypress(&mut frame, 2, 0);

        assert_eq!(profile.position(), -10);
        assert_eq!(profile.highlight(), Some(2));
        assert!(frame.is_blank());
    }

    #[test]
    fn test_highlight_flashes_once() {
        let (mut profile, mut frame) = active();

        profile.keypress(&mut frame, 2, 5);
        assert_eq!(profile.highlight(), Some(2));

        profile.tick(&mut frame);
        for col in 0..NUM_COLUMNS {
            assert_eq!(frame.get(2, col), Some(GREEN));
        }
        assert_eq!(frame.get(0, 1), Some(glyph(51)));
        assert_eq!(profile.highlight(), None);

        profile.tick(&mut frame);
        for col in 0..NUM_COLUMNS {
            assert_eq!(frame.get(2, col), Some(BLACK));
        }
        assert_eq!(frame.get(0, 1), Some(glyph(102)));
        assert_eq!(lit_keys(&frame), 1);
    }

    #[test]
    fn test_glyph_pulses_over_phase_cycle() {
        assert_eq!(TypewriterProfile::glyph_brightness(0), 0);
        assert_eq!(TypewriterProfile::glyph_brightness(1), 51);
        assert_eq!(TypewriterProfile::glyph_brightness(5), 255);
        assert_eq!(TypewriterProfile::glyph_brightness(70), 255);
        assert_eq!(TypewriterProfile::glyph_brightness(72), 153);
        assert_eq!(TypewriterProfile::glyph_brightness(75), 0);
        assert_eq!(TypewriterProfile::glyph_brightness(140), 0);
    }

    #[test]
    fn test_phase_wraps_after_140() {
        let (mut profile, mut frame) = active();

        for _ in 0..140 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.phase(), 140);

        profile.tick(&mut frame);
        assert_eq!(profile.phase(), 0);
        assert!(frame.is_blank());

        profile.tick(&mut frame);
        assert_eq!(profile.phase(), 1);
        assert_eq!(frame.get(0, 0), Some(glyph(51)));
    }

    #[test]
    fn test_colors_are_dimmed() {
        let dim = NaiveDim::new(128);
        let mut frame = KeyFrame::with_dim(dim);
        let mut profile = TypewriterProfile::new();
        profile.init(&mut frame);
        profile.keypress(&mut frame, 1, 0);

        for _ in 0..5 {
            profile.tick(&mut frame);
        }

        assert_eq!(frame.get(0, 1), Some(dim.apply(glyph(255))));
    }

    #[test]
    fn test_out_of_range_highlight_is_dropped() {
        let (mut profile, mut frame) = active();

        profile.keypress(&mut frame, NUM_ROWS as u8 + 4, 0);
        profile.tick(&mut frame);

        assert_eq!(profile.highlight(), None);
        assert_eq!(lit_keys(&frame), 1);
    }

    #[test]
    fn test_init_is_idempotent_and_disarms_highlight() {
        let (mut profile, mut frame) = active();
        profile.keypress(&mut frame, 4, 0);
        profile.keypress(&mut frame, 4, 0);

        profile.init(&mut frame);
        let once = profile.clone();
        profile.init(&mut frame);

        assert_eq!(profile.position(), once.position());
        assert_eq!(profile.phase(), once.phase());
        assert_eq!(profile.highlight(), None);
        assert!(frame.is_blank());
    }
}
