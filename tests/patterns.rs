mod tests {
    use myrtio_keylight::color::{PALETTE, hsv2rgb, rgb_from_u32};
    use myrtio_keylight::geometry::{MOD_KEYS, NUM_COLUMNS, NUM_ROWS};
    use myrtio_keylight::profile::{
        BreathingProfile, ColorBleedProfile, Oscillator, PaletteStripesProfile,
        RainbowSweepProfile, SolidColorProfile, SpectrumProfile, StripeAxis, WaveProfile,
    };
    use myrtio_keylight::{Hsv, KeyFrame, NaiveDim, Profile, ProfileId, Rgb};

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };

    fn ticked<P: Profile>(mut profile: P, frame: &mut KeyFrame) -> P {
        profile.init(frame);
        profile.tick(frame);
        profile
    }

    fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
        hsv2rgb(Hsv { hue, sat, val })
    }

    fn assert_all(frame: &KeyFrame, color: Rgb) {
        assert!(frame.leds().iter().all(|led| *led == color));
    }

    #[test]
    fn test_solid_colors_fill_every_key() {
        let mut frame = KeyFrame::new();

        ticked(SolidColorProfile::red(), &mut frame);
        assert_all(&frame, RED);

        ticked(SolidColorProfile::green(), &mut frame);
        assert_all(&frame, GREEN);

        ticked(SolidColorProfile::blue(), &mut frame);
        assert_all(&frame, BLUE);

        ticked(SolidColorProfile::white(), &mut frame);
        assert_all(&frame, hsv(63, 125, 255));
    }

    #[test]
    fn test_solid_color_is_dimmed() {
        let mut frame = KeyFrame::with_dim(NaiveDim::new(128));

        ticked(SolidColorProfile::red(), &mut frame);

        assert_all(&frame, Rgb { r: 128, g: 0, b: 0 });
    }

    #[test]
    fn test_miami_nights_paints_mod_keys() {
        let mut frame = KeyFrame::new();
        let teal = rgb_from_u32(0x0000_979c);
        let magenta = rgb_from_u32(0x009c_008f);

        ticked(SolidColorProfile::miami_nights(), &mut frame);

        for &(row, col) in &MOD_KEYS {
            assert_eq!(frame.get(row, col), Some(magenta));
        }
        assert_eq!(frame.get(1, 5), Some(teal));
        assert_eq!(frame.get(4, 5), Some(teal));
        let accented = frame.leds().iter().filter(|led| **led == magenta).count();
        assert_eq!(accented, MOD_KEYS.len());
    }

    #[test]
    fn test_color_bleed_pattern() {
        let mut frame = KeyFrame::with_dim(NaiveDim::new(10));

        ticked(ColorBleedProfile, &mut frame);

        assert_eq!(frame.get(0, 0), Some(BLUE));
        assert_eq!(frame.get(3, 0), Some(BLUE));
        assert_eq!(frame.get(4, 0), Some(RED));
        assert_eq!(frame.get(0, 10), Some(BLUE));
        assert_eq!(frame.get(0, 11), Some(RED));
        assert_eq!(frame.get(1, 1), Some(BLUE));
        assert_eq!(frame.get(1, 2), Some(GREEN));
        assert_eq!(frame.get(1, 3), Some(RED));
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLUMNS {
                assert_eq!(frame.get(row, col), Some(ColorBleedProfile::color_at(row, col)));
            }
        }
    }

    #[test]
    fn test_palette_rows_and_columns() {
        let mut frame = KeyFrame::new();

        ticked(PaletteStripesProfile::new(StripeAxis::Rows), &mut frame);
        for row in 0..NUM_ROWS {
            for col in 0..NUM_COLUMNS {
                assert_eq!(frame.get(row, col), Some(PALETTE[row]));
            }
        }

        ticked(PaletteStripesProfile::new(StripeAxis::Columns), &mut frame);
        assert_eq!(frame.get(2, 0), Some(PALETTE[0]));
        assert_eq!(frame.get(2, 7), Some(PALETTE[7]));
        assert_eq!(frame.get(2, 8), Some(PALETTE[0]));
        assert_eq!(frame.get(4, 13), Some(PALETTE[5]));
    }

    #[test]
    fn test_static_palette_does_not_move() {
        let mut frame = KeyFrame::new();
        let mut profile = ticked(PaletteStripesProfile::new(StripeAxis::Columns), &mut frame);
        let first = frame.clone();

        profile.tick(&mut frame);

        assert_eq!(profile.offset(), 0);
        assert_eq!(frame, first);
    }

    #[test]
    fn test_scrolling_palette_shifts_each_tick() {
        let mut frame = KeyFrame::new();
        let mut profile = ticked(
            PaletteStripesProfile::new(StripeAxis::Columns).with_scrolling(),
            &mut frame,
        );
        assert_eq!(profile.offset(), 1);
        assert_eq!(frame.get(0, 0), Some(PALETTE[0]));

        profile.tick(&mut frame);
        assert_eq!(frame.get(0, 0), Some(PALETTE[1]));
        assert_eq!(frame.get(0, 7), Some(PALETTE[0]));

        for _ in 0..6 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.offset(), 0);

        profile.init(&mut frame);
        assert_eq!(profile.offset(), 0);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_rainbow_flow_rotates_column_hues() {
        let mut frame = KeyFrame::new();
        let profile = ticked(RainbowSweepProfile::flow(), &mut frame);

        assert_eq!(profile.hues().len(), NUM_COLUMNS);
        assert_eq!(profile.hues()[0], 3);
        assert_eq!(profile.hues()[13], 146);
        assert_eq!(frame.get(3, 0), Some(hsv(0, 255, 255)));
        assert_eq!(frame.get(3, 1), Some(hsv(11, 255, 255)));
        assert_eq!(frame.get(0, 13), Some(hsv(143, 255, 255)));
    }

    #[test]
    fn test_rainbow_flow_skips_hue_gap() {
        let mut frame = KeyFrame::new();
        let mut profile = ticked(RainbowSweepProfile::flow(), &mut frame);

        // Last column: 143 + 3 * 12 = 179
        for _ in 0..11 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.hues()[13], 179);

        profile.tick(&mut frame);
        assert_eq!(profile.hues()[13], 243);

        // The fifth step wraps past 255
        for _ in 0..5 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.hues()[13], 2);
    }

    #[test]
    fn test_rainbow_waterfall_uses_rows() {
        let mut frame = KeyFrame::new();
        let profile = ticked(RainbowSweepProfile::waterfall(), &mut frame);

        assert_eq!(profile.hues(), &[3, 13, 23, 33, 43]);
        for col in 0..NUM_COLUMNS {
            assert_eq!(frame.get(0, col), Some(hsv(0, 255, 125)));
            assert_eq!(frame.get(4, col), Some(hsv(40, 255, 125)));
        }
    }

    #[test]
    fn test_oscillator_bounces_between_limits() {
        let mut osc = Oscillator::new(5, 5, 11, 3);

        let mut seen = [0u8; 8];
        for value in &mut seen {
            osc.advance();
            *value = osc.value();
        }

        assert_eq!(seen, [8, 11, 8, 5, 8, 11, 8, 5]);
    }

    #[test]
    fn test_breathing_ramps_down_then_up() {
        let mut frame = KeyFrame::new();
        let mut profile = ticked(BreathingProfile::new(), &mut frame);
        assert_all(&frame, hsv(85, 255, 180));
        assert_eq!(profile.value(), 178);

        for _ in 0..88 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.value(), 2);

        profile.tick(&mut frame);
        assert_all(&frame, hsv(85, 255, 2));
        assert_eq!(profile.value(), 4);
    }

    #[test]
    fn test_spectrum_turns_at_top() {
        let mut frame = KeyFrame::new();
        let mut profile = ticked(SpectrumProfile::new(), &mut frame);
        assert_all(&frame, hsv(2, 255, 125));
        assert_eq!(profile.hue(), 5);

        // 2 + 3 * 59 overshoots the upper limit once
        for _ in 0..58 {
            profile.tick(&mut frame);
        }
        assert_eq!(profile.hue(), 179);

        profile.tick(&mut frame);
        assert_eq!(profile.hue(), 176);
    }

    #[test]
    fn test_wave_columns_are_phase_shifted() {
        let mut frame = KeyFrame::new();
        let profile = ticked(WaveProfile::new(), &mut frame);

        assert_eq!(frame.get(0, 0), Some(hsv(190, 255, 0)));
        assert_eq!(frame.get(2, 10), Some(hsv(190, 255, 100)));
        assert_eq!(frame.get(4, 13), Some(hsv(190, 255, 140)));
        assert_eq!(profile.value(0), 3);
        assert_eq!(profile.value(10), 103);
        assert_eq!(profile.value(13), 137);
        assert_eq!(profile.value(NUM_COLUMNS), 0);
    }

    #[test]
    fn test_non_reactive_slots_ignore_key_presses() {
        for id in ProfileId::ALL {
            let mut slot = id.to_slot();
            if slot.is_reactive() {
                continue;
            }
            let mut frame = KeyFrame::new();
            slot.init(&mut frame);
            slot.tick(&mut frame);
            let before = frame.clone();

            slot.keypress(&mut frame, 1, 1);

            assert_eq!(frame, before, "{}", id.as_str());
        }
    }

    #[test]
    fn test_init_restarts_every_profile() {
        for id in ProfileId::ALL {
            let mut fresh_frame = KeyFrame::new();
            let mut fresh = id.to_slot();
            fresh.init(&mut fresh_frame);
            fresh.tick(&mut fresh_frame);

            let mut frame = KeyFrame::new();
            let mut slot = id.to_slot();
            slot.init(&mut frame);
            for _ in 0..9 {
                slot.keypress(&mut frame, 2, 3);
                slot.tick(&mut frame);
            }
            slot.init(&mut frame);
            assert!(frame.is_blank(), "{}", id.as_str());
            slot.init(&mut frame);
            slot.tick(&mut frame);

            assert_eq!(frame, fresh_frame, "{}", id.as_str());
            assert_eq!(slot.id(), id);
        }
    }
}
