//! Built-in HTML grammar
//!
//! Production rules covering 108 HTML5 elements, 44 obsolete elements and
//! 147 attributes, plus a limited CSS and SVG vocabulary. Two flavours share
//! almost every rule:
//!
//! - [`GrammarFlavor::Corpus`]: plain pages for an on-disk corpus
//! - [`GrammarFlavor::Fuzz`]: pages whose `<body>`/`<frameset>` run the
//!   mutation payload on load and whose `<head>` disables caching

use crate::error::GrammarError;
use crate::grammar::{Grammar, GrammarBuilder};
use crate::payload::MutationPayload;

/// Start symbol of every built-in document
pub const START_SYMBOL: &str = "html_document";

/// Rule holding the mutation payload in the fuzz flavour
pub const PAYLOAD_RULE: &str = "domfuzz";

/// Which variant of the built-in grammar to build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GrammarFlavor {
    /// Static pages, no script payload
    Corpus,
    /// Pages embedding the rendered payload
    Fuzz(MutationPayload),
}

/// Build the built-in HTML grammar
///
/// # Errors
/// Only if the rule data itself is defective; the shipped rules always build.
pub fn html_grammar(flavor: &GrammarFlavor) -> Result<Grammar, GrammarError> {
    let mut builder = GrammarBuilder::new();
    register_all(&mut builder, SHARED_RULES);

    match flavor {
        GrammarFlavor::Corpus => register_all(&mut builder, CORPUS_RULES),
        GrammarFlavor::Fuzz(payload) => {
            register_all(&mut builder, FUZZ_RULES);
            builder.register_literal(PAYLOAD_RULE, payload.as_str());
        }
    }

    builder.build()
}

fn register_all(builder: &mut GrammarBuilder, rules: &[(&str, &str)]) {
    for (name, spec) in rules {
        builder.register_rule(name, spec);
    }
}

/// Rules shared by both flavours.
const SHARED_RULES: &[(&str, &str)] = &[
    ("a_tag", r#"<a accesskey="c" charset="UTF-8" coords="0,0,82,126" download="blah" href="http://127.0.0.1" hreflang="en" media="screen and (min-width:500px)" name="blah" rel="nofollow" rev="alternate" shape="rect" target="_top" type="text/html"> a_content </a>"#),
    ("a_content", r#"heading | text"#),
    ("abbr_tag", r#"<abbr title="blah"> blah </abbr>"#),
    ("acronym_tag", r#"<acronym title="blah"> blah </acronym>"#),
    ("address_tag", r#"<address> address_content </address>"#),
    ("address_content", r#"p_tag | text"#),
    ("app_tag", r#"<app code="blah.class"></app>"#),
    ("applet_content", r#"<param name="autoplay" type="blah" value="true" valuetype="object"> body_content"#),
    ("applet_tag", r#"<applet align="left" alt="blah" archive="http://127.0.0.1" code="blah.class" codebase="http://127.0.0.1" height="350" hspace="5" name="blah" object="blah" vspace="5" width="350"> applet_content </applet>"#),
    ("area_tag", r#"<area alt="blah" coords="0,0,82,126" download="blah" href="http://127.0.0.1" hreflang="en" media="screen and (min-color-index:256)" nohref rel="alternate" shape="circle" target="_top" type="text/html">"#),
    ("article_tag", r#"<article> block_content </article>"#),
    ("aside_tag", r#"<aside> h3_tag p_tag </aside>"#),
    ("audio_tag", r#"<audio autoplay controls loop preload="none"> source_tag </audio> | <audio autoplay controls loop preload="none" src="blah.ogg"> </audio>"#),
    ("b_tag", r#"<b> text </b>"#),
    ("base_tag", r#"<base href="http://127.0.0.1" target="_parent">"#),
    ("basefont_tag", r#"<basefont color="red" face="courier, serif" size="5"> body_content </basefont>"#),
    ("bdi_tag", r#"<bdi> blah blah </bdi>"#),
    ("bdo_tag", r#"<bdo dir="rtl"> blah blah </bdo>"#),
    ("bgsound_tag", r#"<bgsound balance="1" loop="3" src="blah.wav" volume="1">"#),
    ("big_tag", r#"<big> text </big>"#),
    ("blink_tag", r#"<blink> text </blink>"#),
    ("block", r#"block_content"#),
    ("block_content", r#"article_tag | aside_tag | basefont_tag | blockquote_tag | button_tag | center_tag | datalist_tag | dir_tag | div_tag | dl_tag | figure_tag | footer_tag | form_tag | form_tag label_tag | form_tag output_tag | header_tag | isindex_tag | listing_tag | main_tag | header_tag main_tag footer_tag | menu_tag | multicol_tag | nav_tag | nobr_tag | ol_tag | output_tag | p_tag | pre_tag | svg_tag | table_tag | template_tag | typewriter_tag | ul_tag | xmp_tag"#),
    ("blockquote_tag", r#"<blockquote cite="http://127.0.0.1"> body_content </blockquote>"#),
    ("body_content", r#"address_tag block | bgsound_tag block | comment_tag block | hgroup_tag block | heading block | hr_tag block | layer_tag block | map_tag block | marquee_tag block | block text"#),
    ("br_tag", r#"blah <br> blah blah"#),
    ("button_tag", r#"<button autofocus form="form1" formaction="blah.php" formenctype="text/plain" formmethod="post" formnovalidate formtarget="_blank" name="blahbutton" type="button" value="blah"> blah </button>"#),
    ("canvas_tag", r#"<canvas height="200" id="blahcanvas" width="200" style="border:1px solid"></canvas> <script> var canvas = document.getElementById("blahcanvas"); var ctx = canvas.getContext("2d"); ctx.fillStyle = "red"; ctx.fillRect(0, 0, 80, 80); </script>"#),
    ("caption_tag", r#"<caption align="top"> body_content </caption>"#),
    ("center_tag", r#"<center> body_content </center>"#),
    ("cite_tag", r#"<cite> text </cite> | <cite accesskey="sdsd" class="blah" contextmenu="blahmenu" dir="rtl" draggable="false" dropzone="link" lang="en" spellcheck="false" tabindex="200" title="blah" translate="no"> text </cite>"#),
    ("code_tag", r#"<code> text </code>"#),
    ("colgroup_content", r#"<col align="char" char="." charoff="2" span="2" valign="bottom" width="80">"#),
    ("colgroup_tag", r#"<colgroup align="left" char="." charoff="2" span="2" valign="bottom" width="80"> colgroup_content </colgroup>"#),
    ("command_tag", r#"<command type="command" label="Save" icon="blah.png" onclick="save()">"#),
    ("comment_tag", r#"<!-- This is a comment --> | <comment> This is a very old fashioned comment </comment>"#),
    ("content_style", r#"cite_tag | code_tag | dfn_tag | em_tag | kbd_tag | samp_tag | strong_tag | var_tag"#),
    ("data_tag", r#"<data id="blahdata" value="blah"> blah </data>"#),
    ("datalist_tag", r#"<datalist id="blahdatalist"> option_tag option_tag </datalist>"#),
    ("dd_tag", r#"<dd> flow </dd>"#),
    ("del_tag", r#"<del cite="blah.htm" datetime="2016-11-10T22:55:03Z"> blah </del>"#),
    ("details_tag", r#"<details open> summary_tag p_tag </details>"#),
    ("dfn_tag", r#"<dfn title="blah"> text </dfn>"#),
    ("dialog_tag", r#"<dialog id="dialog1" open> blah </dialog>"#),
    ("dir_tag", r#"<dir compact> li_tag </dir> | <dir> li_tag </dir>"#),
    ("div_tag", r#"<div align="justify" contextmenu="blahmenu"> body_content </div> | <div align="right"> body_content </div>"#),
    ("dl_content", r#"dt_tag dd_tag"#),
    ("dl_tag", r#"<dl> dl_content </dl>"#),
    ("doctype_tag", r#"<!DOCTYPE html> | <!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01//EN" "http://www.w3.org/TR/html4/strict.dtd"> | <!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 3.2 Final//EN">"#),
    ("dt_tag", r#"<dt accesskey="h" class="blah" contextmenu="blahmenu" dir="rtl" draggable="true" dropzone="link" lang="fr" spellcheck="true" tabindex="2" title="blah" translate="yes"> text </dt> | <dt> text </dt>"#),
    ("em_tag", r#"<em> text </em>"#),
    ("embed_tag", r#"<embed height="200" src="blah.swf" type="application/vnd.adobe.flash-movie" width="200"> flash blah"#),
    ("figcaption_tag", r#"<figcaption> blah </figcaption>"#),
    ("figure_tag", r#"<figure> img_tag figcaption_tag </figure>"#),
    ("flow", r#"flow_content"#),
    ("flow_content", r#"block | text"#),
    ("font_tag", r#"<font color="green" face="verdana" size="3"> style_text </font>"#),
    ("footer_tag", r#"<footer> p_tag p_tag </footer>"#),
    ("form_content", r#"<input accept="image/*" align="right" alt="blah" autocomplete="off" autofocus checked dirname="fname.dir" form="form1" formaction="demo_admin.asp" formenctype="multipart/form-data" formmethod="post" formnovalidate="formnovalidate" formtarget="_top" height="48" list="blah" max="5" maxlength="10" min="2" multiple name="email" pattern="[A-Za-z]{3}" placeholder="blah" readonly required size="30" src="submit.gif" step="3" type="file" width="40"><input type="submit" value="Submit form"> | body_content | keygen_tag | select_tag | textarea_tag"#),
    ("form_tag", r#"<form accept="image/gif,image/jpeg" accept-charset="ISO-8859-1" action="blah.php" autocomplete="off" enctype="text/plain" method="post" name="form1" novalidate target="_self"> <fieldset> legend_tag form_content </fieldset> </form>"#),
    ("frameset_content", r#"<frame frameborder="1" longdesc="w3s.txt" marginheight="50" marginwidth="25" name="frame_a" noresize="noresize" scrolling="yes" src="http://127.0.0.1"> | noframes_tag"#),
    ("h1_tag", r#"<h1 align="left"> text </h1>"#),
    ("h2_tag", r#"<h2 align="right"> text </h2>"#),
    ("h3_tag", r#"<h3 align="center" draggable="true"> text </h3>"#),
    ("h4_tag", r#"<h4 align="justify"> text </h4>"#),
    ("h5_tag", r#"<h5 class="h5"> text </h5>"#),
    ("h6_tag", r#"<h6 class="h6" dropzone="copy"> text </h6>"#),
    ("head_content", r#"base_tag | isindex_tag | link_tag | meta_tag | nextid_tag | style_tag | title_tag"#),
    ("header_tag", r#"<header> h1_tag p_tag </header>"#),
    ("heading", r#"h1_tag | h2_tag | h3_tag | h4_tag | h5_tag | h6_tag"#),
    ("hgroup_tag", r#"<hgroup> h1_tag h2_tag </hgroup>"#),
    ("hp_tag", r#"hp0_tag | hp1_tag | hp2_tag | hp3_tag"#),
    ("hp0_tag", r#"<hp0> blah </hp0>"#),
    ("hp1_tag", r#"<hp1> blah </hp1>"#),
    ("hp2_tag", r#"<hp2> blah </hp2>"#),
    ("hp3_tag", r#"<hp3> blah </hp3>"#),
    ("hr_tag", r#"<hr align="right" noshade size="30" width="30">"#),
    ("html_document", r#"html_tag"#),
    ("html_tag", r#"<html> html_content </html> | <html manifest="" xmlns="http://www.w3.org/1999/xhtml"> html_content </html>"#),
    ("hype_tag", r#"<hype> blah </hype>"#),
    ("i_tag", r#"<i> text </i>"#),
    ("iframe_tag", r#"<iframe align="right" frameborder="1" longdesc="blah.txt" marginheight="50" marginwidth="50" name="blahiframe" sandbox="allow-same-origin" scrolling="yes" srcdoc="<p>Hello blah!</p>" src="http://127.0.0.1" width="500">"#),
    ("ilayer_tag", r#"<ilayer above="layer1" background="blah.gif" below="layer2" bgcolor="red" class="classname1" clip="1,1,20,20" height="100" id="blahblah1" left="10" name="blah" pagex="10" pagey="10" src="https://127.0.0.1/" style="blah" top="100" visibility="show" width="50" z-index="1"> body_content </ilayer>"#),
    ("image_tag", r#"<image src="blah.gif"></image>"#),
    ("img_tag", r#"<img alt="blah" border="5" crossorigin="anonymous" height="100" hspace="20" src="blah.gif" width="100">"#),
    ("ins_tag", r#"<ins cite="blah.html" datetime="2016-09-15T22:55:03Z"> blah blah </ins>"#),
    ("isindex_tag", r#"<isindex action="http://127.0.0.1" prompt="blah">"#),
    ("kbd_tag", r#"<kbd> text </kbd>"#),
    ("key_tag", r#"<key> blah </key>"#),
    ("keygen_tag", r#"<keygen autofocus challenge form="form1" keytype="rsa" name="security">"#),
    ("label_tag", r#"<label for="blah" form="form1"> blah </label>"#),
    ("layer_tag", r#"<layer id="layer1" top="250" left="50" width="200" height="200" bgcolor="red"> body_content </layer>"#),
    ("legend_tag", r#"<legend align="right"> blah </legend>"#),
    ("li_tag", r#"<li type="square" value="100"> flow </li> | <li hidden> flow </li>"#),
    ("link_tag", r#"<link charset="ISO-2022-JP" crossorigin="anonymous" href="theme.css" hreflang="en" media="print" rel="dns-prefetch" rev="parent" sizes="16x16" target="_blank" type="text/css">"#),
    ("listing_tag", r#"<listing> blah blah </listing>"#),
    ("main_tag", r#"<main> article_tag article_tag </main>"#),
    ("map_content", r#"area_tag"#),
    ("map_tag", r#"<map name="blahmap"> map_content </map>"#),
    ("mark_tag", r#"<mark> blah </mark>"#),
    ("marquee_tag", r#"<marquee width="200" height="50" direction="left" behavior="alternate" scrolldelay="500" scrollamount="50" bgcolor="yellow" hspace="10" vspace="10" loop="20"> style_text </marquee> | <marquee width="2000" height="500" direction="right" behavior="alternate" scrolldelay="500" scrollamount="80" bgcolor="blue" hspace="50" vspace="50" loop="20"> scrolling along </marquee>"#),
    ("menu_tag", r#"<menu label="blahmenu" type="list" id="mymenu"> li_tag </menu> | <menu label="blahmenu" type="list" id="mymenu"> menuitem_tag </menu>"#),
    ("menuitem_tag", r#"<menuitem checked default icon="blah.png" type="radio" radiogroup="alignment" label="Left"></menuitem>"#),
    ("meter_tag", r#"<meter form="form1" name="x1" min="0" low="40" high="90" max="100" optimum="72" value="95"></meter>"#),
    ("multicol_tag", r#"<multicol width="150" cols="3"> body_content </multicol>"#),
    ("nav_tag", r#"<nav> a_tag a_tag </nav>"#),
    ("nextid_tag", r#"<nextid N="z20">"#),
    ("nobr_tag", r#"<nobr> text </nobr>"#),
    ("noembed_tag", r#"<noembed> blah blah </noembed>"#),
    ("noframes_tag", r#"<noframes> body_content </noframes>"#),
    ("noscript_tag", r#"<noscript> text </noscript>"#),
    ("object_content", r#"param_tag body_content"#),
    ("object_tag", r#"<object tabindex="3" align="right" border="5" data="blah.swf" declare form="form1" height="200" hspace="100" name="obj1" standby="blah blah" vspace="100" width="200"> object_content </object>"#),
    ("ol_tag", r#"<ol compact reversed start="50" type="I"> li_tag li_tag li_tag </ol>"#),
    ("option_tag", r#"<option label="blah" value="blah" selected> plain_text </option>"#),
    ("output_tag", r#"<output form="form1" name="x" for="a b"></output>"#),
    ("p_tag", r#"<p align="center" contenteditable="false" id="p_fuzz"> text </p> | <p align="left" id="p_fuzz" translate="yes"> text </p>"#),
    ("param_tag", r#"<param name="autoplay" type="blah" value="true" valuetype="object">"#),
    ("physical_style", r#"b_tag | big_tag | blink_tag | font_tag | i_tag | s_tag | small_tag | span_tag | strike_tag | sub_tag | sup_tag | tt_tag | u_tag"#),
    ("plain_text", r#"blah blah blah"#),
    ("plaintext_tag", r#"<plaintext> blah blah blah"#),
    ("pre_content", r#"a_tag | br_tag | hr_tag | style_text"#),
    ("pre_tag", r#"<pre width="30"> pre_content </pre>"#),
    ("progress_tag", r#"<progress value="22" max="100"></progress>"#),
    ("q_tag", r#"<q cite="blah.html"> blah </q>"#),
    ("ruby_tag", r#"<ruby> blah <rb> blah </rb> <rt> <rp>(</rp> blah <rp>)</rp> </rt> <rtc> blah </rtc> </ruby>"#),
    ("s_tag", r#"<s> text </s>"#),
    ("samp_tag", r#"<samp> text </samp>"#),
    ("script_tag", r#"<script async charset="UTF-8"> document.write("blah blah!") </script> | <script defer type="text/javascript" xml:space="preserve"> document.getElementById("demo").innerHTML = "blah!"; </script>"#),
    ("section_tag", r#"<section> h1_tag p_tag </section>"#),
    ("select_tag", r#"<select autofocus form="form1" multiple name="blahselect" required size="5"> <optgroup label="blah"> option_tag option_tag </optgroup> </select>"#),
    ("server_tag", r#"<server> plain_text </server>"#),
    ("small_tag", r#"<small> text </small>"#),
    ("sound_tag", r#"<sound> blah </sound>"#),
    ("source_tag", r#"<source media="screen and (min-width:320px)" src="blah.mp3" type="audio/mpeg">"#),
    ("spacer_tag", r#"<spacer align="left" size="90" type="horizontal"> | <spacer align="right" size="150" type="vertical"> | <spacer align="center" type="block" width="100" height="100">"#),
    ("span_tag", r#"<span style="color:blue"> text </span>"#),
    ("strike_tag", r#"<strike> text </strike>"#),
    ("strong_tag", r#"<strong> text </strong>"#),
    ("style_text", r#"testing testing"#),
    ("sub_tag", r#"<sub> text </sub>"#),
    ("summary_tag", r#"<summary> blah </summary>"#),
    ("sup_tag", r#"<sup> text </sup>"#),
    ("table_cell", r#"td_tag | th_tag"#),
    ("table_content", r#"<thead align="char" char="." charoff="5" valign="top"> tr_tag </thead> <tfoot align="char" char="." charoff="1" valign="top"> tr_tag </tfoot> <tbody align="right" char="." charoff="2" valign="bottom"> tr_tag </tbody>"#),
    ("table_tag", r#"<table align="right" bgcolor="yellow" border="1" cellpadding="10" cellspacing="10" frame="box" rules="rows" sortable summary="blah blah" width="400"> caption_tag colgroup_tag table_content </table>"#),
    ("td_tag", r#"<td abbr="blah" axis="blah" bgcolor="red" headers="blah" nowrap scope="row" valign="baseline"> body_content </td>"#),
    ("template_tag", r#"<template id="blah"> tr_tag tr_tag </template>"#),
    ("text", r#"text_content"#),
    ("text_content", r#"a_tag | abbr_tag | acronym_tag | app_tag | applet_tag | audio_tag | b_tag | bdi_tag | bdo_tag | big_tag | blink_tag | br_tag | canvas_tag | cite_tag | code_tag | command_tag | comment_tag | data_tag | del_tag | details_tag | dfn_tag | dialog_tag | em_tag | embed_tag | font_tag | hp_tag | hype_tag | i_tag | iframe_tag | ilayer_tag | image_tag | img_tag | ins_tag | kbd_tag | key_tag | mark_tag | meter_tag | noembed_tag | noscript_tag | object_tag | plain_text | progress_tag | q_tag | ruby_tag | s_tag | script_tag | section_tag | server_tag | small_tag | sound_tag | spacer_tag | span_tag | strike_tag | strong_tag | sub_tag | sup_tag | u_tag | samp_tag | svg_tag | time_tag | tt_tag | u_tag | var_tag | video_tag | wbr_tag"#),
    ("textarea_tag", r#"<textarea spellcheck="true" cols="2" dirname="blah.dir" form="form1" maxlength="50" name="blahtextarea" placeholder="blah" required rows="2" wrap="hard"> plain_text </textarea>"#),
    ("th_tag", r#"<th abbr="blah" axis="blah" bgcolor="red" headers="blah" nowrap scope="row" valign="baseline"> body_content </th>"#),
    ("time_tag", r#"<time datetime="2016-02-14"> blah </time>"#),
    ("title_tag", r#"<title> plain_text </title>"#),
    ("tr_tag", r#"<tr align="right" bgcolor="blue" valign="middle"> table_cell </tr>"#),
    ("tt_tag", r#"<tt> text </tt>"#),
    ("typewriter_tag", r#"<typewriter> pre_content </typewriter>"#),
    ("u_tag", r#"<u> text </u>"#),
    ("ul_tag", r#"<ul compact type="square"> li_tag li_tag li_tag </ul> | <ul type="circle"> li_tag li_tag li_tag </ul>"#),
    ("var_tag", r#"<var> text </var>"#),
    ("video_tag", r#"<video autoplay loop preload="metadata" width="320" height="240" controls> <source src="blah.mp4" type="video/mp4"> <track default src="blah.vtt" kind="subtitles" srclang="en" label="English"> </video>"#),
    ("wbr_tag", r#"<wbr> text"#),
    ("xmp_tag", r#"<xmp> <b> should not be bold </b> </xmp>"#),
    ("style_tag", r#"<style media="print" scoped type="text/css"> body_rule </style> | <style media="screen" scoped type="text/css"> code_rule h1_rule hr_rule img_rule p_rule pre_rule svg_rule </style> | <style media="screen" scoped type="text/css"> body_rule </style>"#),
    ("body_rule", r#"body {margin:0;padding:0;font-family:"Nexa Bold",sans-serif;text-rendering:optimizeLegibility!important;-webkit-font-smoothing:antialiased!important;font-size:16px;color:#58595b;background:#f2f2f2!important;overflow-x:hidden}"#),
    ("code_rule", r#"code,kbd,pre,samp{font-size:1em}"#),
    ("h1_rule", r#"h1 {color:red;}"#),
    ("hr_rule", r#"hr{height:0;-webkit-box-sizing:content-box;-moz-box-sizing:content-box;box-sizing:content-box}"#),
    ("img_rule", r#"img {border:0;vertical-align:middle}"#),
    ("p_rule", r#"p {color:blue;}"#),
    ("pre_rule", r#"pre,textarea{overflow:auto}"#),
    ("svg_rule", r#"svg:not(:root){overflow:hidden}"#),
    ("svg_content", r#"svgdesc_tag svgcircle_tag svgellipse_tag svgline_tag svgpolygon_tag svgpolyline_tag svgrect_tag | svgdesc_tag svgcircle_tag svgpolygon_tag svgellipse_tag | svgdesc_tag svgline_tag | svgdesc_tag svgrect_tag | svgpolygon_tag svgellipse_tag"#),
    ("svg_tag", r#"<svg baseProfile="full" contentScriptType="application/ecmascript" focusable="true" height="500" timelineBegin="onStart" version="1.0" viewBox="0 50 1500 1000" width="500" zoomAndPan="magnify"> svg_content </svg> | <svg baseProfile="basic" contentScriptType="application/ecmascript" focusable="false" height="900" timelineBegin="onLoad" version="1.1" viewBox="50 0 1400 1000" width="900" zoomAndPan="disable"> svg_content </svg> | <svg baseProfile="tiny" contentScriptType="application/ecmascript" focusable="auto" height="500" timelineBegin="onStart" version="1.2" viewBox="0 90 1500 1000" width="500" zoomAndPan="magnify"> svg_content </svg>"#),
    ("svganimatetransform_tag", r#"<animateTransform attributeName="transform" attributeType="XML" type="rotate" from="0" to="360" begin="0s" dur="1s" repeatCount="indefinite"></animateTransform>"#),
    ("svgcircle_tag", r#"<circle cx="125" cy="125" r="75" fill="orange"> </circle> | <circle cx="125" cy="125" r="75" fill="yellow"> svganimatetransform_tag </circle>"#),
    ("svgdesc_tag", r#"<desc> SVG Test </desc>"#),
    ("svgellipse_tag", r#"<ellipse transform="translate(900 200) rotate(-30)" rx="250" ry="100" fill="none" stroke="blue" stroke-width="20"> </ellipse> | <ellipse rx="250" ry="100" fill="red"> </ellipse> | <ellipse rx="250" ry="100" fill="yellow"> svganimatetransform_tag </ellipse>"#),
    ("svgline_tag", r#"<line x1="50" y1="50" x2="200" y2="200" stroke="blue" stroke-width="40"> </line> | <line x1="50" y1="50" x2="400" y2="400" stroke="red" stroke-width="8"> svganimatetransform_tag </line>"#),
    ("svgpolygon_tag", r#"<polygon fill="red" stroke="blue" stroke-width="10" points="350,75  379,161 469,161 397,215 423,301 350,250 277,301 303,215 231,161 321,161" /> | <polygon fill="lime" stroke="blue" stroke-width="10" points="850,75 958,137.5 958,262.5 850,325 742,262.6 742,137.5" /> | <polygon fill="red" stroke="blue" stroke-width="10" points="350,75  379,161 469,161 397,215 423,301 350,250 277,301 303,215 231,161 321,161"> svganimatetransform_tag </polygon> | <polygon fill="lime" stroke="red" stroke-width="10" points="850,75 958,137.5 958,262.5 850,325 742,262.6 742,137.5"> svganimatetransform_tag </polygon>"#),
    ("svgpolyline_tag", r#"<polyline points="50,150 50,200 200,200 200,100" stroke="red" stroke-width="4" fill="none"> </polyline> | <polyline points="50,150 50,200 200,200 200,100" stroke="red" stroke-width="4" fill="none"> svganimatetransform_tag </polyline> | <polyline fill="none" stroke="blue" stroke-width="10" points="50,375 150,375 150,325 250,325 250,375 350,375 350,250 450,250 450,375 550,375 550,175 650,175 650,375 750,375 750,100 850,100 850,375 950,375 950,25 1050,25 1050,375 1150,375" /> | <polyline fill="none" stroke="blue" stroke-width="10" points="50,375 150,375 150,325 250,325 250,375 350,375 350,250 450,250 450,375 550,375 550,175 650,175 650,375 750,375 750,100 850,100 850,375 950,375 950,25 1050,25 1050,375 1150,375"> svganimatetransform_tag </polyline>"#),
    ("svgrect_tag", r#"<rect x="25" y="25" width="200" height="200" fill="lime" stroke-width="4" stroke="pink"> </rect> | <rect x="25" y="25" width="200" height="200" fill="lime" stroke-width="4" stroke="pink"> svganimatetransform_tag </rect>"#),
];

/// Rules for plain corpus pages.
const CORPUS_RULES: &[(&str, &str)] = &[
    ("body_tag", r#"<body alink="green" bgcolor="blue" link="red" text="green" vlink="red"> body_content </body> | <body alink="green" background="blah.jpg" link="blue" text="green" vlink="red"> body_content </body> | <body alink="green" bgcolor="red" link="blue" text="green" vlink="red"> body_content </body> | <body alink="green" bgcolor="green" link="blue" text="red" vlink="red"> body_content </body> | <body alink="green" bgcolor="yellow" link="blue" text="red" vlink="red"> body_content </body>"#),
    ("frameset_tag", r#"<frameset cols="25%,*,25%" rows="25%,*,25%"> frameset_content </frameset>"#),
    ("head_tag", r#"<head> head_content </head>"#),
    ("html_content", r#"head_tag body_tag | head_tag frameset_tag | head_tag body_tag plaintext_tag | head_tag body_tag"#),
    ("meta_tag", r#"<meta charset="UTF-8"> | <meta name="keywords" content="HTML,Fuzzing"> | <meta name="date" content="2016-11-07" scheme="YYYY-MM-DD"> | <meta http-equiv="cache-control" content="no-cache">"#),
];

/// Rules for pages that carry the mutation payload.
const FUZZ_RULES: &[(&str, &str)] = &[
    ("body_tag", r#"<body onload="domFuzz();" alink="green" bgcolor="blue" link="red" text="green" vlink="red"> domfuzz body_content </body> | <body onload="domFuzz();" alink="green" background="blah.jpg" link="blue" text="green" vlink="red"> domfuzz body_content </body> | <body onload="domFuzz();" alink="green" bgcolor="red" link="blue" text="green" vlink="red"> domfuzz body_content </body> | <body onload="domFuzz();" alink="green" bgcolor="green" link="blue" text="red" vlink="red"> domfuzz body_content </body> | <body onload="domFuzz();" alink="green" bgcolor="yellow" link="blue" text="red" vlink="red"> domfuzz body_content </body>"#),
    ("frameset_tag", r#"domfuzz <frameset onload="domFuzz();" cols="25%,*,25%" rows="25%,*,25%"> frameset_content frameset_content frameset_content frameset_content </frameset>"#),
    ("head_tag", r#"<head> <meta http-equiv="cache-control" content="no-cache"> head_content </head>"#),
    ("html_content", r#"head_tag body_tag | head_tag frameset_tag | head_tag body_tag plaintext_tag | head_tag body_tag | head_tag body_tag | head_tag body_tag | head_tag body_tag | head_tag body_tag"#),
    ("meta_tag", r#"<meta charset="UTF-8"> | <meta name="keywords" content="HTML,Fuzzing"> | <meta name="date" content="2016-11-07" scheme="YYYY-MM-DD"> | <meta http-equiv="refresh" content="100">"#),
];
