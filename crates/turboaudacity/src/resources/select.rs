//! Select menu

resource! {
    /// Select menu.
    ///
    /// For an explicit time or frequency range use
    /// [`Scripting::select_time`](crate::resources::Scripting::select_time) and
    /// [`Scripting::select_frequencies`](crate::resources::Scripting::select_frequencies).
    Select
}

impl Select<'_> {
    bare_macros! {
        select_all => "SelectAll";
        select_none => "SelectNone";
        cursor_to_stored_cursor => "SelCursorStoredCursor";
        store_cursor_position => "StoreCursorPosition";
        /// Move the selection edges to the nearest zero crossings.
        zero_crossing => "ZeroCross";
        all_tracks => "SelAllTracks";
        sync_locked_tracks => "SelSyncLockTracks";
        /// Left edge of the selection to the playback position.
        left_at_playback_position => "Left at Playback Position";
        right_at_playback_position => "Right at Playback Position";
        track_start_to_cursor => "SelTrackStartToCursor";
        cursor_to_track_end => "SelCursorToTrackEnd";
        track_start_to_end => "SelTrackStartToEnd";
        /// Remember the current selection.
        store_selection => "SelSave";
        /// Restore the remembered selection.
        retrieve_selection => "SelRestore";
        toggle_spectral_selection => "ToggleSpectralSelection";
        next_higher_peak_frequency => "NextHigherPeakFrequency";
        next_lower_peak_frequency => "NextLowerPeakFrequency";
        previous_clip_boundary_to_cursor => "SelPrevClipBoundaryToCursor";
        cursor_to_next_clip_boundary => "SelCursorToNextClipBoundary";
        previous_clip => "SelPrevClip";
        next_clip => "SelNextClip";
    }
}
