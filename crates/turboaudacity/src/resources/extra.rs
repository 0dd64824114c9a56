//! Extra menu

resource! {
    /// Extra menu: commands normally bound to keys, shown once
    /// "Extra Menus" is enabled in the View menu.
    Extra
}

impl Extra<'_> {
    bare_macros! {
        full_screen_on_off => "FullScreenOnOff";
        play => "Play";
        stop => "Stop";
        play_one_second => "PlayOneSec";
        play_to_selection => "PlayToSelection";
        play_before_selection_start => "PlayBeforeSelectionStart";
        play_after_selection_start => "PlayAfterSelectionStart";
        play_before_selection_end => "PlayBeforeSelectionEnd";
        play_after_selection_end => "PlayAfterSelectionEnd";
        play_before_and_after_selection_start => "PlayBeforeAndAfterSelectionStart";
        play_before_and_after_selection_end => "PlayBeforeAndAfterSelectionEnd";
        play_cut_preview => "PlayCutPreview";
        select_tool => "SelectTool";
        envelope_tool => "EnvelopeTool";
        draw_tool => "DrawTool";
        zoom_tool => "ZoomTool";
        multi_tool => "MultiTool";
        previous_tool => "PrevTool";
        next_tool => "NextTool";
        /// Opens the playback volume dialog.
        output_gain => "OutputGain";
        output_gain_inc => "OutputGainInc";
        output_gain_dec => "OutputGainDec";
        /// Opens the recording volume dialog.
        input_gain => "InputGain";
        input_gain_inc => "InputGainInc";
        input_gain_dec => "InputGainDec";
        delete_key => "DeleteKey";
        delete_key2 => "DeleteKey2";
        play_at_speed => "PlayAtSpeed";
        play_at_speed_looped => "PlayAtSpeedLooped";
        play_at_speed_cut_preview => "PlayAtSpeedCutPreview";
        set_play_speed => "SetPlaySpeed";
        play_speed_inc => "PlaySpeedInc";
        play_speed_dec => "PlaySpeedDec";
        move_to_previous_label => "MoveToPrevLabel";
        move_to_next_label => "MoveToNextLabel";
        seek_left_short => "SeekLeftShort";
        seek_right_short => "SeekRightShort";
        seek_left_long => "SeekLeftLong";
        seek_right_long => "SeekRightLong";
        input_device => "InputDevice";
        output_device => "OutputDevice";
        audio_host => "AudioHost";
        input_channels => "InputChannels";
        snap_to_off => "SnapToOff";
        snap_to_nearest => "SnapToNearest";
        snap_to_prior => "SnapToPrior";
        selection_to_start => "SelStart";
        selection_to_end => "SelEnd";
        selection_extend_left => "SelExtLeft";
        selection_extend_right => "SelExtRight";
        selection_set_extend_left => "SelSetExtLeft";
        selection_set_extend_right => "SelSetExtRight";
        selection_contract_left => "SelCntrLeft";
        selection_contract_right => "SelCntrRight";
        previous_frame => "PrevFrame";
        next_frame => "NextFrame";
        previous_track => "PrevTrack";
        next_track => "NextTrack";
        first_track => "FirstTrack";
        last_track => "LastTrack";
        shift_up => "ShiftUp";
        shift_down => "ShiftDown";
        toggle => "Toggle";
        toggle_alt => "ToggleAlt";
        cursor_left => "CursorLeft";
        cursor_right => "CursorRight";
        cursor_short_jump_left => "CursorShortJumpLeft";
        cursor_short_jump_right => "CursorShortJumpRight";
        cursor_long_jump_left => "CursorLongJumpLeft";
        cursor_long_jump_right => "CursorLongJumpRight";
        clip_left => "ClipLeft";
        clip_right => "ClipRight";
        track_pan => "TrackPan";
        track_pan_left => "TrackPanLeft";
        track_pan_right => "TrackPanRight";
        track_gain => "TrackGain";
        track_gain_inc => "TrackGainInc";
        track_gain_dec => "TrackGainDec";
        track_menu => "TrackMenu";
        track_mute => "TrackMute";
        track_solo => "TrackSolo";
        track_close => "TrackClose";
        track_move_up => "TrackMoveUp";
        track_move_down => "TrackMoveDown";
        track_move_top => "TrackMoveTop";
        track_move_bottom => "TrackMoveBottom";
        previous_window => "PrevWindow";
        next_window => "NextWindow";
    }
}
