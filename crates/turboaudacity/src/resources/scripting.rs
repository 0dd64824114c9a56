//! Scripting commands

use crate::error::Result;
use crate::types::{GetInfo, Message, SelectFrequencies, SelectTime, ToCommand};
use serde::de::DeserializeOwned;
use turboaudacity_protocol::{InfoFormat, InfoType};

resource! {
    /// Commands that only exist for scripting: explicit selections, state
    /// queries and messages.
    Scripting
}

impl Scripting<'_> {
    /// Set the time selection (`SelectTime`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use turboaudacity::{Client, types::SelectTime};
    /// # async fn example(client: Client) -> turboaudacity::Result<()> {
    /// // Sends: SelectTime: Start="1.0" End="3.0"
    /// client.scripting().select_time(SelectTime::new(1.0, 3.0)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn select_time(&self, params: SelectTime) -> Result<String> {
        self.client.run(&params).await
    }

    /// Set the spectral selection (`SelectFrequencies`).
    pub async fn select_frequencies(&self, params: SelectFrequencies) -> Result<String> {
        self.client.run(&params).await
    }

    /// Query Audacity's state (`GetInfo`), returning the raw text.
    pub async fn get_info(&self, params: GetInfo) -> Result<String> {
        self.client.run(&params).await
    }

    /// Query Audacity's state as JSON and decode the answer.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use turboaudacity::{Client, InfoType};
    /// # async fn example(client: Client) -> turboaudacity::Result<()> {
    /// let tracks: Vec<serde_json::Value> = client.scripting().get_info_json(InfoType::Tracks).await?;
    /// println!("{} tracks", tracks.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_info_json<T: DeserializeOwned>(&self, info_type: InfoType) -> Result<T> {
        let params = GetInfo {
            info_type,
            format: InfoFormat::Json,
        };
        let response = self.client.query(&params.to_command()?).await?;
        Ok(response.json()?)
    }

    /// Echo text back through the pipe (`Message`).
    pub async fn message(&self, params: Message) -> Result<String> {
        self.client.run(&params).await
    }

    unimplemented_macros! {
        select_tracks => "SelectTracks";
        set_track_status => "SetTrackStatus";
        set_track_audio => "SetTrackAudio";
        set_track_visuals => "SetTrackVisuals";
        get_preference => "GetPreference";
        set_preference => "SetPreference";
        set_clip => "SetClip";
        set_envelope => "SetEnvelope";
        set_label => "SetLabel";
        set_project => "SetProject";
        select => "Select";
        set_track => "SetTrack";
        help => "Help";
        drag => "Drag";
        compare_audio => "CompareAudio";
    }
}
