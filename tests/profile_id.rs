mod tests {
    use myrtio_keylight::ProfileId;

    #[test]
    fn test_profile_id_parse_typewriter() {
        assert_eq!(
            ProfileId::parse_from_str("typewriter"),
            Some(ProfileId::Typewriter)
        );
    }

    #[test]
    fn test_profile_id_from_raw_reactive() {
        assert_eq!(ProfileId::from_raw(14), Some(ProfileId::ReactiveFade));
        assert_eq!(ProfileId::from_raw(15), Some(ProfileId::ReactivePulse));
        assert_eq!(ProfileId::from_raw(16), Some(ProfileId::Typewriter));
    }

    #[test]
    fn test_profile_id_from_raw_unknown() {
        assert_eq!(ProfileId::from_raw(17), None);
        assert_eq!(ProfileId::from_raw(255), None);
    }

    #[test]
    fn test_profile_id_parse_unknown() {
        assert_eq!(ProfileId::parse_from_str("aurora"), None);
        assert_eq!(ProfileId::parse_from_str(""), None);
    }

    #[test]
    fn test_profile_id_as_str_miami_nights() {
        assert_eq!(ProfileId::MiamiNights.as_str(), "miami_nights");
    }

    #[test]
    fn test_profile_ids_are_consistent() {
        for id in ProfileId::ALL {
            assert_eq!(ProfileId::from_raw(id as u8), Some(id));
            assert_eq!(ProfileId::parse_from_str(id.as_str()), Some(id));
            assert_eq!(id.to_slot().id(), id);
        }
    }

    #[test]
    fn test_only_reactive_profiles_take_key_presses() {
        for id in ProfileId::ALL {
            let reactive = matches!(
                id,
                ProfileId::ReactiveFade | ProfileId::ReactivePulse | ProfileId::Typewriter
            );
            assert_eq!(id.to_slot().is_reactive(), reactive, "{}", id.as_str());
        }
    }

    #[test]
    fn test_profile_slots_format_for_debugging() {
        for id in ProfileId::ALL {
            assert!(!format!("{:?}", id.to_slot()).is_empty());
        }

        let white = format!("{:?}", ProfileId::White.to_slot());
        assert!(white.contains("hue: 63, sat: 125, val: 255"), "{white}");
        let red = format!("{:?}", ProfileId::Red.to_slot());
        assert!(red.contains("Rgb("), "{red}");
    }
}
