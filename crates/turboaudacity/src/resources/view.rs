//! View menu

resource! {
    /// View menu: zoom, track size and toolbars.
    View
}

impl View<'_> {
    bare_macros! {
        undo_history => "UndoHistory";
        karaoke => "Karaoke";
        mixer_board => "MixerBoard";
        show_extra_menus => "ShowExtraMenus";
        show_clipping => "ShowClipping";
        zoom_in => "ZoomIn";
        zoom_normal => "ZoomNormal";
        zoom_out => "ZoomOut";
        zoom_to_selection => "ZoomSel";
        zoom_toggle => "ZoomToggle";
        advanced_vertical_zoom => "AdvancedVZoom";
        fit_to_width => "FitInWindow";
        fit_to_height => "FitV";
        collapse_all_tracks => "CollapseAllTracks";
        expand_all_tracks => "ExpandAllTracks";
        skip_to_selection_start => "SkipSelStart";
        skip_to_selection_end => "SkipSelEnd";
        reset_toolbars => "ResetToolbars";
        show_transport_toolbar => "ShowTransportTB";
        show_tools_toolbar => "ShowToolsTB";
        show_record_meter_toolbar => "ShowRecordMeterTB";
        show_play_meter_toolbar => "ShowPlayMeterTB";
        show_mixer_toolbar => "ShowMixerTB";
        show_edit_toolbar => "ShowEditTB";
        show_transcription_toolbar => "ShowTranscriptionTB";
        show_scrubbing_toolbar => "ShowScrubbingTB";
        show_device_toolbar => "ShowDeviceTB";
        show_selection_toolbar => "ShowSelectionTB";
        show_spectral_selection_toolbar => "ShowSpectralSelectionTB";
    }
}
