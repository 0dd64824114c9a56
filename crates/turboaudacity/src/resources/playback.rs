//! Transport menu

resource! {
    /// Transport menu: playing, recording and cursor movement.
    ///
    /// Called `playback` rather than `transport` to keep it apart from the
    /// pipe [`Transport`](turboaudacity_transport::Transport).
    Playback
}

impl Playback<'_> {
    bare_macros! {
        rescan_devices => "RescanDevices";
        /// Start playback, or stop it if it is running.
        play_stop => "PlayStop";
        play_stop_and_set_cursor => "PlayStopSelect";
        pause => "Pause";
        record => "Record1stChoice";
        record_new_track => "Record2ndChoice";
        timer_record => "TimerRecord";
        punch_and_roll => "PunchAndRoll";
        scrub => "Scrub";
        seek => "Seek";
        toggle_scrub_ruler => "ToggleScrubRuler";
        cursor_to_selection_start => "CursSelStart";
        cursor_to_selection_end => "CursSelEnd";
        cursor_to_track_start => "CursTrackStart";
        cursor_to_track_end => "CursTrackEnd";
        cursor_to_previous_clip_boundary => "CursPrevClipBoundary";
        cursor_to_next_clip_boundary => "CursNextClipBoundary";
        cursor_to_project_start => "CursProjectStart";
        cursor_to_project_end => "CursProjectEnd";
        sound_activation_level => "SoundActivationLevel";
        sound_activation => "SoundActivation";
        pinned_play_head => "PinnedHead";
        overdub => "Overdub";
        software_playthrough => "SWPlaythrough";
    }
}
