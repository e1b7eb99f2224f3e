pub mod u001_lead_capture;
