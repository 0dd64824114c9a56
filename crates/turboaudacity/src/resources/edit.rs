//! Edit menu

resource! {
    /// Edit menu: clipboard, undo history, clip boundaries and labels.
    Edit
}

impl Edit<'_> {
    bare_macros! {
        undo => "Undo";
        redo => "Redo";
        cut => "Cut";
        delete => "Delete";
        copy => "Copy";
        paste => "Paste";
        duplicate => "Duplicate";
        /// Opens the metadata editor.
        edit_metadata => "EditMetaData";
        /// Opens the preferences dialog.
        preferences => "Preferences";
        split_cut => "SplitCut";
        split_delete => "SplitDelete";
        /// Replace the selection with silence.
        silence => "Silence";
        /// Delete everything outside the selection.
        trim => "Trim";
        split => "Split";
        split_new => "SplitNew";
        join => "Join";
        disjoin => "Disjoin";
        edit_labels => "EditLabels";
        add_label => "AddLabel";
        add_label_playing => "AddLabelPlaying";
        paste_new_label => "PasteNewLabel";
        type_to_create_label => "TypeToCreateLabel";
        cut_labels => "CutLabels";
        delete_labels => "DeleteLabels";
        split_cut_labels => "SplitCutLabels";
        split_delete_labels => "SplitDeleteLabels";
        copy_labels => "CopyLabels";
        split_labels => "SplitLabels";
        join_labels => "JoinLabels";
        disjoin_labels => "DisjoinLabels";
    }
}
