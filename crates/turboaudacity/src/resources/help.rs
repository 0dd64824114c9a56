//! Help menu

resource! {
    /// Help menu. Every entry opens a window or a browser.
    Help
}

impl Help<'_> {
    bare_macros! {
        quick_help => "QuickHelp";
        manual => "Manual";
        updates => "Updates";
        about => "About";
        device_info => "DeviceInfo";
        midi_device_info => "MidiDeviceInfo";
        show_log => "Log";
        crash_report => "CrashReport";
        check_dependencies => "CheckDeps";
    }
}
