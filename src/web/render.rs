// HTML rendering for the status board

use crate::config::PageChrome;
use crate::systemd::models::ServiceRecord;

/// Heading row with the legend toggle button.
const HEADING_TABLE: &str = r#"<table>
  <tr>
    <th>&nbsp<button onclick="toggleKeyTable()" class="tableButton">Hide/Show<br>Key</button>&nbsp</th>
    <th><h3>&nbsp &nbsp &nbsp Background Process (Daemon) Information &nbsp &nbsp &nbsp</h3></th>
  </tr>
</table>
"#;

/// Legend table mapping every symbol the board can show to its description,
/// plus the script backing the Hide/Show button.
const KEY_TABLE: &str = r#"<div id="keyTable">
<br>
<table>
  <tr>
    <th>Status/Symbol</th>
    <th>Description</th>
  </tr>
  <tr>
    <td>&#128994</td>
    <td>Service is active</td>
  </tr>
  <tr>
    <td>&#128308</td>
    <td>Service is not active</td>
  </tr>
  <tr>
    <td>Enabled &#9989</td>
    <td>Service automatically starts on boot</td>
  </tr>
  <tr>
    <td>Disabled &#10060</td>
    <td>Service does not automatically start on boot</td>
  </tr>
  <tr>
    <td>Masked &#127917</td>
    <td>Completely disabled, any start operation on it fails</td>
  </tr>
  <tr>
    <td>Static &#9940</td>
    <td>The unit file is not enabled, and has no provisions <br>for enabling in the [Install] unit file section</td>
  </tr>
  <tr>
    <td>Alias &#128195&#8594&#128196</td>
    <td>The name is an alias (symlink to another unit file)</td>
  </tr>
  <tr>
    <td>Indirect &#8669</td>
    <td>The unit file itself is not enabled, but it has non-empty Also=<br>setting in the [Install] unit file section</td>
  </tr>
  <tr>
    <td>Enabled Runtime &#127939&#9201</td>
    <td>Service automatically starts on boot</td>
  </tr>
  <tr>
    <td>Unknown&#10067</td>
    <td>Unknown Service</td>
  </tr>
  <tr>
    <td>N/A</td>
    <td>Not Applicable</td>
  </tr>
</table>
</div>
<script>
function toggleKeyTable() {
  var x = document.getElementById("keyTable");
  if (x.style.display === "none") {
    x.style.display = "table";
  } else {
    x.style.display = "none";
  }
}
</script>
"#;

/// Search box wired to the client-side filter script.
const SEARCH_CONTROLS: &str = r#"<table>
  <tr>
    <th>&nbsp &nbsp Search &nbsp &nbsp</th>
    <th><input type="text" id="tableInput" onkeyup="tableFunction()" placeholder="Type to look for a service..." title="search"></th>
  </tr>
</table>
"#;

/// Client-side filter over the service table, matching on the name column.
const SEARCH_SCRIPT: &str = r#"<script>
function tableFunction() {
  var input, filter, table, tr, td, i, txtValue;
  input = document.getElementById("tableInput");
  filter = input.value.toUpperCase();
  table = document.getElementById("table");
  tr = table.getElementsByTagName("tr");
  for (i = 0; i < tr.length; i++) {
    td = tr[i].getElementsByTagName("td")[0];
    if (td) {
      txtValue = td.textContent || td.innerText;
      if (txtValue.toUpperCase().indexOf(filter) > -1) {
        tr[i].style.display = "";
      } else {
        tr[i].style.display = "none";
      }
    }
  }
}
</script>
"#;

/// Render the service table: a header row plus exactly one data row per
/// record. Purely presentational; state is taken from the records as-is.
pub fn render_table(records: &[ServiceRecord]) -> String {
    let mut table = String::from(
        "<table id=\"table\">\n  <tr>\n    <th><b>Service</b></th>\n    <th><b>Status</b></th>\n    <th><b>Enabled on boot</b></th>\n  </tr>\n",
    );
    for record in records {
        table.push_str(&render_row(record));
    }
    table.push_str("</table>\n");
    table
}

fn render_row(record: &ServiceRecord) -> String {
    if record.exists {
        format!(
            "  <tr>\n    <td>{}</td>\n    <td>{}</td>\n    <td>{}</td>\n  </tr>\n",
            record.name,
            record.active.symbol(),
            record.enablement.label(),
        )
    } else {
        format!(
            "  <tr>\n    <td>Unit {} could not be found</td>\n    <td>N/A</td>\n    <td>N/A</td>\n  </tr>\n",
            record.name,
        )
    }
}

/// Assemble the full page body: start fragment, heading and legend, search
/// box, service table, search script, end fragment.
pub fn page(chrome: &PageChrome, records: &[ServiceRecord]) -> String {
    let mut body = String::new();
    body.push_str(&chrome.start);
    body.push_str("<br>\n<br>\n");
    body.push_str(HEADING_TABLE);
    body.push_str(KEY_TABLE);
    body.push_str("<br>\n<br>\n<br>\n");
    body.push_str(SEARCH_CONTROLS);
    body.push_str("<br>\n");
    body.push_str(&render_table(records));
    body.push_str("<br>\n<br>\n");
    body.push_str(SEARCH_SCRIPT);
    body.push_str(&chrome.end);
    body
}
