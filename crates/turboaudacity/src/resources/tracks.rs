//! Tracks menu

resource! {
    /// Tracks menu: adding, mixing, muting and aligning tracks.
    Tracks
}

impl Tracks<'_> {
    bare_macros! {
        resample => "Resample";
        remove_tracks => "RemoveTracks";
        sync_lock => "SyncLock";
        new_mono_track => "NewMonoTrack";
        new_stereo_track => "NewStereoTrack";
        new_label_track => "NewLabelTrack";
        new_time_track => "NewTimeTrack";
        stereo_to_mono => "Stereo to Mono";
        mix_and_render => "MixAndRender";
        mix_and_render_to_new_track => "MixAndRenderToNewTrack";
        mute_all_tracks => "MuteAllTracks";
        unmute_all_tracks => "UnmuteAllTracks";
        mute_tracks => "MuteTracks";
        unmute_tracks => "UnmuteTracks";
        pan_left => "PanLeft";
        pan_right => "PanRight";
        pan_center => "PanCenter";
        align_end_to_end => "Align_EndToEnd";
        align_together => "Align_Together";
        align_start_to_zero => "Align_StartToZero";
        align_start_to_selection_start => "Align_StartToSelStart";
        align_start_to_selection_end => "Align_StartToSelEnd";
        align_end_to_selection_start => "Align_EndToSelStart";
        align_end_to_selection_end => "Align_EndToSelEnd";
        move_selection_with_tracks => "MoveSelectionWithTracks";
        sort_by_time => "SortByTime";
        sort_by_name => "SortByName";
    }
}
